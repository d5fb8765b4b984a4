use async_trait::async_trait;

use helmer_model::{Director, Film, FilmCredit, FilmId, PersonId, PersonSummary};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Stateless request/response seam to the movie metadata service.
///
/// Implementations perform no retries and hold no cache; every failure is
/// normalized into [`ProviderError`] here so nothing upstream ever sees a
/// raw transport error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search people by name. Returned entries are unfiltered; restricting
    /// to directors is a consumer concern (the upstream endpoint has no
    /// server-side role filter).
    async fn search_people(&self, query: &str) -> Result<Vec<PersonSummary>, ProviderError>;

    /// Fetch a single person record.
    async fn person(&self, id: PersonId) -> Result<Director, ProviderError>;

    /// Fetch a person's movie crew credits.
    async fn person_movie_credits(&self, id: PersonId)
    -> Result<Vec<FilmCredit>, ProviderError>;

    /// Fetch full movie details.
    async fn movie(&self, id: FilmId) -> Result<Film, ProviderError>;

    /// Fetch movies similar to the given one (partial records).
    async fn similar_movies(&self, id: FilmId) -> Result<Vec<Film>, ProviderError>;
}
