//! Core processing building blocks: size policies, resampling, smoothing,
//! and the per-utility pipelines. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
