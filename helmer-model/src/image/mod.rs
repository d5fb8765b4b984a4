//! Image size buckets and CDN path resolution.

mod resolve;
mod sizes;

pub use resolve::{PLACEHOLDER_ASSET, resolve_image_url};
pub use sizes::{ImageSize, PosterSize, ProfileSize};
