//! Pixel-level building blocks: size policies, resampling, and the SMOOTH
//! filter, plus the two pipelines that chain them.
pub mod pipeline;
pub mod resize;
pub mod scale;
pub mod smooth;
