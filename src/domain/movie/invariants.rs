use chrono::{Datelike, Utc};

use super::entity::MovieDraft;
use crate::domain::{DomainError, DomainResult};

/// Earliest year a film can have been released
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;

/// Validates all MovieDraft invariants.
///
/// These checks belong to the producing collaborator (form screens, import
/// front-ends): the store persists what it is given and does not re-run them.
pub fn validate_draft(draft: &MovieDraft) -> DomainResult<()> {
    validate_title(&draft.title)?;
    validate_release_year(draft.release_year)?;
    Ok(())
}

/// Title cannot be empty or whitespace-only
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Release year must fall in 1888..=(current year + 5)
pub fn validate_release_year(year: i32) -> DomainResult<()> {
    let latest = Utc::now().year() + 5;
    if year < EARLIEST_RELEASE_YEAR || year > latest {
        return Err(DomainError::InvariantViolation(format!(
            "Release year {} outside {}..={}",
            year, EARLIEST_RELEASE_YEAR, latest
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity (id) is assigned by the store and immutable
/// 2. Title is never empty once persisted
/// 3. Status is always one of the three enumerated values
/// 4. Category text comes from the fixed genre set (producer-enforced)
/// 5. Poster references are opaque: never validated, never fetched

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = MovieDraft::new("Rush", "Action", 2013);
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let draft = MovieDraft::new("   ", "Action", 2013);
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert!(validate_release_year(EARLIEST_RELEASE_YEAR).is_ok());
        assert!(validate_release_year(EARLIEST_RELEASE_YEAR - 1).is_err());
        let next_year = Utc::now().year() + 1;
        assert!(validate_release_year(next_year).is_ok());
        assert!(validate_release_year(next_year + 10).is_err());
    }
}
