//! Detail assembly for the director and film views.
//!
//! The assemblers stitch together several metadata calls per view. The
//! person record and the credit list are both required for a filmography;
//! everything past that is best-effort enrichment, so one bad film never
//! sinks the page.

use futures::future::join_all;
use tracing::warn;

use helmer_model::sort::{SortBy, sort_films};
use helmer_model::{Director, Film, FilmId, PersonId};

use crate::providers::{MetadataProvider, ProviderError};

/// Everything the director detail view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Filmography {
    pub director: Director,
    pub films: Vec<Film>,
}

impl Filmography {
    /// Reorder the film list. Callers re-sort in place on every toggle; the
    /// underlying data is not refetched.
    pub fn sort(&mut self, by: SortBy) {
        sort_films(&mut self.films, by);
    }
}

/// Everything the film detail view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmView {
    pub film: Film,
    /// Related titles; empty when the lookup fails or has no entries.
    pub similar: Vec<Film>,
}

/// Build the director detail view.
///
/// The person record and the credit list are fetched concurrently and both
/// must succeed. Credits are reduced to directing jobs, then every film is
/// enriched with a concurrent detail fetch; a film whose detail fetch fails
/// stays in the list with its credit-level fields only. The result arrives
/// sorted by release date, newest first.
pub async fn assemble_filmography<P: MetadataProvider>(
    provider: &P,
    person: PersonId,
) -> Result<Filmography, ProviderError> {
    let (director, credits) = tokio::join!(
        provider.person(person),
        provider.person_movie_credits(person),
    );
    let director = director?;
    let credits = credits?;

    let directed = credits
        .into_iter()
        .filter(|credit| credit.is_directing())
        .map(|credit| credit.film);

    let mut films = join_all(directed.map(|film| enrich(provider, film))).await;
    sort_films(&mut films, SortBy::ReleaseDate);

    Ok(Filmography { director, films })
}

/// Build the film detail view. The film itself is required; the similar
/// list degrades to empty on failure.
pub async fn assemble_film<P: MetadataProvider>(
    provider: &P,
    film: FilmId,
) -> Result<FilmView, ProviderError> {
    let (detail, similar) = tokio::join!(provider.movie(film), provider.similar_movies(film));

    let similar = similar.unwrap_or_else(|err| {
        warn!(film = %film, error = %err, "similar-films lookup failed; showing none");
        Vec::new()
    });

    Ok(FilmView {
        film: detail?,
        similar,
    })
}

async fn enrich<P: MetadataProvider>(provider: &P, film: Film) -> Film {
    match provider.movie(film.id).await {
        Ok(detail) => film.enriched_with(detail),
        Err(err) => {
            warn!(film = %film.id, error = %err, "film enrichment failed; keeping credit data");
            film
        }
    }
}
