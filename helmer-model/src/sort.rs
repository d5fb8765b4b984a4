use std::cmp::Ordering;

use crate::film::Film;

/// Sort orders the presentation layer can request for a film list.
///
/// All orders are descending. Rating and popularity are distinct upstream
/// fields and sort differently; see DESIGN.md for the history behind that
/// distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    ReleaseDate,
    Rating,
    Popularity,
}

/// Sort films in place. The sort is stable, so ties keep input order, and
/// films with a missing release date or popularity sort after all films with
/// a known value.
pub fn sort_films(films: &mut [Film], by: SortBy) {
    match by {
        SortBy::ReleaseDate => {
            films.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        }
        SortBy::Rating => {
            films.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
        }
        SortBy::Popularity => {
            films.sort_by(|a, b| desc_with_missing_last(a.popularity, b.popularity));
        }
    }
}

fn desc_with_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
