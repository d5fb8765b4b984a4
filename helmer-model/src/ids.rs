use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Strongly typed ID for people (directors) with validation
///
/// Wraps the upstream numeric TMDB id. Upstream ids are always positive;
/// zero is rejected at construction so an absent id is a caller error, not
/// something that leaks into a request path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub fn new(raw: u64) -> Result<Self, ModelError> {
        if raw == 0 {
            return Err(ModelError::InvalidId(
                "person id must be a positive integer".to_string(),
            ));
        }
        Ok(PersonId(raw))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for PersonId {
    type Error = ModelError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(ModelError::InvalidId(format!(
                "person id must be a positive integer, got {raw}"
            )));
        }
        PersonId::new(raw as u64)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for films with validation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FilmId(u64);

impl FilmId {
    pub fn new(raw: u64) -> Result<Self, ModelError> {
        if raw == 0 {
            return Err(ModelError::InvalidId(
                "film id must be a positive integer".to_string(),
            ));
        }
        Ok(FilmId(raw))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for FilmId {
    type Error = ModelError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(ModelError::InvalidId(format!(
                "film id must be a positive integer, got {raw}"
            )));
        }
        FilmId::new(raw as u64)
    }
}

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
