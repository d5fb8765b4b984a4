//! Convenience re-exports for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::film::{Film, FilmCredit, Genre};
pub use crate::ids::{FilmId, PersonId};
pub use crate::image::{
    ImageSize, PosterSize, ProfileSize, PLACEHOLDER_ASSET, resolve_image_url,
};
pub use crate::person::{DIRECTING_DEPARTMENT, DIRECTOR_JOB, Director, PersonSummary};
pub use crate::sort::{SortBy, sort_films};
pub use crate::theme::{ResolvedTheme, THEME_STORAGE_KEY, Theme};
