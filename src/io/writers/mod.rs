pub mod webp;

pub use self::webp::{encode_webp, write_webp};
