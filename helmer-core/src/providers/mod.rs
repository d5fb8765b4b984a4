//! Metadata provider seam and implementations.

mod tmdb;
mod traits;

pub use tmdb::{TMDB_API_BASE, TMDB_IMAGE_BASE, TmdbProvider};
pub use traits::{MetadataProvider, ProviderError};

#[cfg(test)]
pub(crate) use traits::MockMetadataProvider;
