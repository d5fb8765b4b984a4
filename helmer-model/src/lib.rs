//! Core data model definitions shared across Helmer crates.

pub mod error;
pub mod film;
pub mod ids;
pub mod image;
pub mod person;
pub mod prelude;
pub mod sort;
pub mod theme;

pub use error::{ModelError, Result as ModelResult};
pub use film::{Film, FilmCredit, Genre};
pub use ids::{FilmId, PersonId};
pub use image::{
    ImageSize, PosterSize, ProfileSize, PLACEHOLDER_ASSET, resolve_image_url,
};
pub use person::{DIRECTING_DEPARTMENT, DIRECTOR_JOB, Director, PersonSummary};
pub use sort::{SortBy, sort_films};
pub use theme::{ResolvedTheme, Theme};
