use std::fmt;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use helmer_model::{Director, Film, FilmCredit, FilmId, Genre, PersonId, PersonSummary};

use super::traits::{MetadataProvider, ProviderError};
use crate::config::{AuthMode, Config};

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// TMDB-backed [`MetadataProvider`]: raw REST calls, serde DTOs mapped onto
/// model types, no retries, no caching.
pub struct TmdbProvider {
    client: Client,
    api_key: String,
    auth_mode: AuthMode,
    api_base: String,
    language: String,
}

impl fmt::Debug for TmdbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbProvider")
            .field("api_base", &self.api_base)
            .field("language", &self.language)
            .field("auth_mode", &self.auth_mode)
            .finish_non_exhaustive()
    }
}

impl TmdbProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.expose().to_string(),
            auth_mode: config.auth_mode,
            api_base: config.api_base.as_str().trim_end_matches('/').to_string(),
            language: config.language.clone(),
        }
    }

    async fn get_json<T>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.api_base, path);
        debug!(%url, "tmdb request");

        let mut request = self
            .client
            .get(&url)
            .query(&[("language", self.language.as_str())])
            .query(extra);
        request = match self.auth_mode {
            AuthMode::Query => request.query(&[("api_key", self.api_key.as_str())]),
            AuthMode::Bearer => request.bearer_auth(&self.api_key),
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ProviderError::ParseError(e.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("TMDB request failed with status {status}"));

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TmdbPersonSearchResponse {
    #[serde(default)]
    results: Vec<TmdbPersonResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbPersonResult {
    id: i64,
    name: String,
    profile_path: Option<String>,
    known_for_department: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbPersonDetails {
    id: i64,
    name: String,
    profile_path: Option<String>,
    #[serde(default)]
    biography: Option<String>,
    birthday: Option<String>,
    deathday: Option<String>,
    place_of_birth: Option<String>,
    known_for_department: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbPersonCredits {
    #[serde(default)]
    crew: Vec<TmdbCrewCredit>,
}

#[derive(Debug, Deserialize)]
struct TmdbCrewCredit {
    id: i64,
    title: Option<String>,
    job: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    vote_average: Option<f64>,
    popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    id: i64,
    title: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    vote_average: Option<f64>,
    popularity: Option<f64>,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<TmdbGenre>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbSimilarResponse {
    #[serde(default)]
    results: Vec<TmdbMovieDetails>,
}

/// Upstream dates are `YYYY-MM-DD`; empty or malformed values map to `None`.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn map_person_summary(dto: TmdbPersonResult) -> Option<PersonSummary> {
    let id = match PersonId::try_from(dto.id) {
        Ok(id) => id,
        Err(err) => {
            warn!(raw = dto.id, error = %err, "skipping person with invalid id");
            return None;
        }
    };

    Some(PersonSummary {
        id,
        name: dto.name,
        profile_path: dto.profile_path,
        known_for_department: dto.known_for_department.unwrap_or_default(),
    })
}

fn map_director(dto: TmdbPersonDetails) -> Result<Director, ProviderError> {
    let id = PersonId::try_from(dto.id).map_err(|e| ProviderError::ParseError(e.to_string()))?;

    Ok(Director {
        id,
        name: dto.name,
        profile_path: dto.profile_path,
        biography: dto.biography.unwrap_or_default(),
        birthday: parse_date(dto.birthday.as_deref()),
        deathday: parse_date(dto.deathday.as_deref()),
        place_of_birth: dto.place_of_birth,
        known_for_department: dto.known_for_department.unwrap_or_default(),
    })
}

fn map_credit(dto: TmdbCrewCredit) -> Option<FilmCredit> {
    let id = match FilmId::try_from(dto.id) {
        Ok(id) => id,
        Err(err) => {
            warn!(raw = dto.id, error = %err, "skipping credit with invalid id");
            return None;
        }
    };

    Some(FilmCredit {
        film: Film {
            id,
            title: dto.title.unwrap_or_default(),
            poster_path: dto.poster_path,
            release_date: parse_date(dto.release_date.as_deref()),
            overview: dto.overview.filter(|o| !o.is_empty()),
            vote_average: dto.vote_average.unwrap_or(0.0),
            popularity: dto.popularity,
            runtime: None,
            genres: Vec::new(),
        },
        job: dto.job,
    })
}

fn map_film(dto: TmdbMovieDetails) -> Result<Film, ProviderError> {
    let id = FilmId::try_from(dto.id).map_err(|e| ProviderError::ParseError(e.to_string()))?;

    Ok(Film {
        id,
        title: dto.title,
        poster_path: dto.poster_path,
        release_date: parse_date(dto.release_date.as_deref()),
        overview: dto.overview.filter(|o| !o.is_empty()),
        vote_average: dto.vote_average.unwrap_or(0.0),
        popularity: dto.popularity,
        runtime: dto.runtime,
        genres: dto
            .genres
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect(),
    })
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search_people(&self, query: &str) -> Result<Vec<PersonSummary>, ProviderError> {
        let response: TmdbPersonSearchResponse = self
            .get_json("search/person", &[("query", query), ("page", "1")])
            .await?;

        debug!(
            query,
            count = response.results.len(),
            "tmdb person search returned"
        );

        Ok(response
            .results
            .into_iter()
            .filter_map(map_person_summary)
            .collect())
    }

    async fn person(&self, id: PersonId) -> Result<Director, ProviderError> {
        let dto: TmdbPersonDetails = self.get_json(&format!("person/{id}"), &[]).await?;
        map_director(dto)
    }

    async fn person_movie_credits(
        &self,
        id: PersonId,
    ) -> Result<Vec<FilmCredit>, ProviderError> {
        let response: TmdbPersonCredits = self
            .get_json(&format!("person/{id}/movie_credits"), &[])
            .await?;

        Ok(response.crew.into_iter().filter_map(map_credit).collect())
    }

    async fn movie(&self, id: FilmId) -> Result<Film, ProviderError> {
        let dto: TmdbMovieDetails = self.get_json(&format!("movie/{id}"), &[]).await?;
        map_film(dto)
    }

    async fn similar_movies(&self, id: FilmId) -> Result<Vec<Film>, ProviderError> {
        let response: TmdbSimilarResponse = self
            .get_json(&format!("movie/{id}/similar"), &[("page", "1")])
            .await?;

        // Similar-movie payloads are partial; runtime and genres stay empty
        // until a detail fetch fills them in.
        Ok(response
            .results
            .into_iter()
            .filter_map(|dto| map_film(dto).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upstream_dates() {
        assert_eq!(
            parse_date(Some("2010-07-16")),
            NaiveDate::from_ymd_opt(2010, 7, 16)
        );
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(Some("July 2010")), None);
        assert_eq!(parse_date(None), None);
    }

    #[test]
    fn maps_search_payload() {
        let raw = r#"{
            "page": 1,
            "results": [
                {"id": 525, "name": "Christopher Nolan", "profile_path": "/nolan.jpg", "known_for_department": "Directing"},
                {"id": 0, "name": "Broken", "profile_path": null, "known_for_department": "Acting"},
                {"id": 12, "name": "No Department", "profile_path": null, "known_for_department": null}
            ],
            "total_results": 3
        }"#;

        let response: TmdbPersonSearchResponse = serde_json::from_str(raw).unwrap();
        let people: Vec<_> = response
            .results
            .into_iter()
            .filter_map(map_person_summary)
            .collect();

        // The zero id is dropped; the missing department maps to empty.
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].id.get(), 525);
        assert!(people[0].is_director());
        assert_eq!(people[1].known_for_department, "");
    }

    #[test]
    fn maps_movie_detail_payload() {
        let raw = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/inception.jpg",
            "release_date": "2010-07-16",
            "overview": "A thief who steals corporate secrets.",
            "vote_average": 8.4,
            "popularity": 98.3,
            "runtime": 148,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#;

        let film = map_film(serde_json::from_str(raw).unwrap()).unwrap();
        assert_eq!(film.id.get(), 27205);
        assert_eq!(film.runtime, Some(148));
        assert_eq!(film.genres[1].name, "Science Fiction");
        assert_eq!(film.release_year(), Some(2010));
    }

    #[test]
    fn maps_credits_and_keeps_job() {
        let raw = r#"{
            "cast": [],
            "crew": [
                {"id": 77, "title": "Memento", "job": "Director", "poster_path": null,
                 "release_date": "2000-10-11", "overview": "", "vote_average": 8.2, "popularity": 31.5},
                {"id": 78, "title": "Insomnia", "job": "Producer", "poster_path": null,
                 "release_date": "", "overview": null, "vote_average": null, "popularity": null}
            ]
        }"#;

        let response: TmdbPersonCredits = serde_json::from_str(raw).unwrap();
        let credits: Vec<_> = response.crew.into_iter().filter_map(map_credit).collect();

        assert_eq!(credits.len(), 2);
        assert!(credits[0].is_directing());
        assert!(!credits[1].is_directing());
        // Empty strings normalize to absent values.
        assert_eq!(credits[0].film.overview, None);
        assert_eq!(credits[1].film.release_date, None);
        assert_eq!(credits[1].film.vote_average, 0.0);
    }

    #[test]
    fn similar_payload_tolerates_partial_shape() {
        let raw = r#"{
            "page": 1,
            "results": [
                {"id": 155, "title": "The Dark Knight", "poster_path": "/tdk.jpg",
                 "release_date": "2008-07-18", "overview": "Batman.", "vote_average": 8.5}
            ]
        }"#;

        let response: TmdbSimilarResponse = serde_json::from_str(raw).unwrap();
        let films: Vec<_> = response
            .results
            .into_iter()
            .filter_map(|dto| map_film(dto).ok())
            .collect();

        assert_eq!(films.len(), 1);
        assert_eq!(films[0].runtime, None);
        assert!(films[0].genres.is_empty());
        assert_eq!(films[0].popularity, None);
    }
}
