#![doc = r#"
thumbkit — batch WebP thumbnails and downscaled copies for image directories.

This crate provides two independent utilities that work over a single directory
level, plus the building blocks they share:

- **Thumbnail generator**: shrinks every `.webp` source to fit a bounding box
  (default 960×960, never upscaled) and writes `background_<stem>.webp`.
- **Downscale/filter converter**: scales every `.webp` source by a factor,
  lowering the factor in 0.1 steps until both sides are at most 400 pixels,
  resamples with Lanczos3, applies a 3×3 smoothing filter and writes
  `thumbnail_<file name>` with a WebP quality setting (default 80).

Both power the `thumbkit` CLI and can be embedded in your own applications.

Quick start: one thumbnail
--------------------------
```rust,no_run
use std::path::Path;
use thumbkit::{create_thumbnail, ThumbnailParams};

fn main() -> thumbkit::Result<()> {
    let derived = create_thumbnail(Path::new("/pics/photo.webp"), &ThumbnailParams::default())?;
    println!("Thumbnail saved: {}", derived.output.display());
    Ok(())
}
```

Convert a single file
---------------------
```rust,no_run
use std::path::Path;
use thumbkit::{convert_to_webp, ConvertParams};

fn main() -> thumbkit::Result<()> {
    let params = ConvertParams {
        scale_factor: 0.35,
        ..Default::default()
    };
    let derived = convert_to_webp(
        Path::new("/pics/art.webp"),
        Path::new("/pics/thumbnail_art.webp"),
        &params,
    )?;
    assert!(derived.size.0 <= 400 && derived.size.1 <= 400);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use thumbkit::{convert_directory, generate_thumbnails_in_directory, ConvertParams, ThumbnailParams};

fn main() -> thumbkit::Result<()> {
    let dir = Path::new("/pics");

    let report = generate_thumbnails_in_directory(
        dir,
        None,  // write next to the sources
        &ThumbnailParams::default(),
        false, // stop at the first failure
        |d| println!("Thumbnail saved: {}", d.output.display()),
    )?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);

    convert_directory(dir, None, &ConvertParams::default(), true, |_| {})?;
    Ok(())
}
```

Derived files are never treated as sources on later runs: the thumbnail
generator skips names containing `thumbnail` or `background`, the converter
skips names containing `thumbnail_` or `background_`. Re-running overwrites
existing outputs.

Error handling
--------------
All public functions return `thumbkit::Result<T>`; match on `thumbkit::Error`
to handle specific cases.

```rust,no_run
use std::path::Path;
use thumbkit::{create_thumbnail, Error, ThumbnailParams};

fn main() {
    match create_thumbnail(Path::new("/pics/broken.webp"), &ThumbnailParams::default()) {
        Ok(_) => {}
        Err(Error::Image(e)) => eprintln!("Decode error: {e}"),
        Err(Error::Io(e)) => eprintln!("I/O error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — size policies, resampling, smoothing, and parameters.
- [`io`] — directory scanning, naming, decoding, and WebP writing.
- [`types`] — `BoundingBox`, `WebpMode`, `ResampleFilter`, `Raster`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{ConvertParams, ThumbnailParams};
pub use error::{Error, Result};
pub use types::{BoundingBox, PixelLayout, Raster, ResampleFilter, WebpMode};

// Size policies
pub use core::processing::scale::{scaled_size, thumbnail_size};

// Directory selection and naming
pub use io::naming::{BACKGROUND_PREFIX, THUMBNAIL_PREFIX};
pub use io::scan::{DirectoryScan, SourceFilter, scan_directory};

// High-level API re-exports
pub use api::{
    BatchReport, DerivedImage, convert_directory, convert_to_webp, create_thumbnail,
    create_thumbnail_at, generate_thumbnails_in_directory,
};
