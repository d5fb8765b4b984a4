use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::FilmId;
use crate::person::DIRECTOR_JOB;

/// Genre tag as returned by the metadata service; order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A film, either as a lightweight credit record or enriched with the
/// fields a follow-up detail fetch adds (runtime, genres, full overview).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub overview: Option<String>,
    pub vote_average: f64,
    pub popularity: Option<f64>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Film {
    /// Merge a detail fetch into this record.
    ///
    /// Enrichment may only add or overwrite fields, never change the
    /// identity: a payload carrying a different id leaves the record
    /// untouched.
    pub fn enriched_with(mut self, detail: Film) -> Film {
        if detail.id != self.id {
            return self;
        }

        self.title = detail.title;
        self.poster_path = detail.poster_path.or(self.poster_path);
        self.release_date = detail.release_date.or(self.release_date);
        self.overview = detail.overview.or(self.overview);
        self.vote_average = detail.vote_average;
        self.popularity = detail.popularity.or(self.popularity);
        self.runtime = detail.runtime.or(self.runtime);
        if !detail.genres.is_empty() {
            self.genres = detail.genres;
        }
        self
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// A film attributed to a person via a specific crew role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmCredit {
    pub film: Film,
    pub job: String,
}

impl FilmCredit {
    /// Whether the credited role is the director's chair.
    pub fn is_directing(&self) -> bool {
        self.job == DIRECTOR_JOB
    }
}
