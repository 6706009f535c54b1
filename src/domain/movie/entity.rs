use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// One movie record as persisted by the store.
/// This is the root entity for the whole library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned immutable identifier (SQLite rowid)
    pub id: i64,

    /// Display title; never empty once persisted
    pub title: String,

    /// Genre text; the producing collaborator picks from [`Genre`],
    /// the store persists whatever it is given
    pub category: String,

    /// Release year; domain range is 1888..=(current year + 5)
    pub release_year: i32,

    /// Watch status
    pub status: WatchStatus,

    /// Optional poster reference (local path or URL), never fetched
    pub poster_uri: Option<String>,
}

/// Watch status of a movie
///
/// Persisted and serialized as the display strings ("To Watch", "Watched",
/// "Favorite") so the database column and the JSON interchange format agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WatchStatus {
    #[default]
    #[serde(rename = "To Watch")]
    ToWatch,
    Watched,
    Favorite,
}

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::ToWatch => "To Watch",
            WatchStatus::Watched => "Watched",
            WatchStatus::Favorite => "Favorite",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Watch" => Ok(WatchStatus::ToWatch),
            "Watched" => Ok(WatchStatus::Watched),
            "Favorite" => Ok(WatchStatus::Favorite),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// The fixed genre set offered to producing collaborators.
/// The store itself persists category as plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Animation,
    Documentary,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Animation,
        Genre::Documentary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::Animation => "Animation",
            Genre::Documentary => "Documentary",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| DomainError::UnknownGenre(s.to_string()))
    }
}

/// Insert payload for a new movie; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub category: String,
    pub release_year: i32,
    pub status: WatchStatus,
    pub poster_uri: Option<String>,
}

impl MovieDraft {
    /// Create a draft with the default status (To Watch) and no poster
    pub fn new(title: impl Into<String>, category: impl Into<String>, release_year: i32) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            release_year,
            status: WatchStatus::default(),
            poster_uri: None,
        }
    }

    pub fn with_status(mut self, status: WatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_poster(mut self, poster_uri: impl Into<String>) -> Self {
        self.poster_uri = Some(poster_uri.into());
        self
    }
}

/// An externally supplied record being considered for import.
///
/// Mirrors the JSON interchange format: `id` and `poster_uri` may be null or
/// absent, `status` falls back to "To Watch" when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCandidate {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub release_year: i32,
    #[serde(default)]
    pub status: WatchStatus,
    #[serde(default)]
    pub poster_uri: Option<String>,
}

impl MovieCandidate {
    /// View the candidate's fields as an insert payload (the candidate's id,
    /// if any, is ignored; the store assigns a fresh one)
    pub fn as_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            release_year: self.release_year,
            status: self.status,
            poster_uri: self.poster_uri.clone(),
        }
    }

    /// View the candidate as a full record replacing an existing row
    pub fn as_movie(&self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title.clone(),
            category: self.category.clone(),
            release_year: self.release_year,
            status: self.status,
            poster_uri: self.poster_uri.clone(),
        }
    }
}

impl From<Movie> for MovieCandidate {
    fn from(movie: Movie) -> Self {
        Self {
            id: Some(movie.id),
            title: movie.title,
            category: movie.category,
            release_year: movie.release_year,
            status: movie.status,
            poster_uri: movie.poster_uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_display() {
        for status in [WatchStatus::ToWatch, WatchStatus::Watched, WatchStatus::Favorite] {
            assert_eq!(status.to_string().parse::<WatchStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("Watching".parse::<WatchStatus>().is_err());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = MovieDraft::new("Rush", "Action", 2013);
        assert_eq!(draft.status, WatchStatus::ToWatch);
        assert!(draft.poster_uri.is_none());
    }

    #[test]
    fn test_candidate_deserializes_with_missing_optionals() {
        let json = r#"{"title":"Rush","category":"Action","release_year":2013}"#;
        let candidate: MovieCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, None);
        assert_eq!(candidate.status, WatchStatus::ToWatch);
        assert_eq!(candidate.poster_uri, None);
    }

    #[test]
    fn test_movie_serializes_with_wire_keys() {
        let movie = Movie {
            id: 7,
            title: "Hustle".to_string(),
            category: "Drama".to_string(),
            release_year: 2022,
            status: WatchStatus::Favorite,
            poster_uri: None,
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["status"], "Favorite");
        assert!(value["poster_uri"].is_null());
        assert_eq!(value["release_year"], 2022);
    }

    #[test]
    fn test_genre_parse() {
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert!("Western".parse::<Genre>().is_err());
    }
}
