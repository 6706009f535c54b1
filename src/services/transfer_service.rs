// src/services/transfer_service.rs
//
// Bulk export/import over the JSON interchange format: an array of objects
// with keys id, title, category, release_year, status, poster_uri.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::movie::{Movie, MovieCandidate};
use crate::error::AppResult;
use crate::repositories::MovieRepository;
use crate::services::read_outcome::ReadOutcome;

/// Per-candidate tallies of an import batch.
/// success + failed + skipped always equals the number of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub success: u32,
    pub failed: u32,
    pub skipped: u32,
}

enum ImportAction {
    Applied,
    Skipped,
}

pub struct TransferService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl TransferService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// The serializable snapshot handed to the export collaborator.
    /// Same contents and order as a full listing
    pub fn export_all(&self) -> ReadOutcome<Vec<Movie>> {
        ReadOutcome::from_result("export movies", self.movie_repo.list_all(), Vec::new())
    }

    /// Reconcile a batch of candidates against the store.
    ///
    /// Each candidate is processed independently; one failure never aborts
    /// the rest, and the batch is deliberately not one transaction (partial
    /// application is accepted). A candidate whose id already exists is
    /// skipped, or fully overwritten when `overwrite_duplicates` is set.
    /// Unknown or absent ids insert a new record with a fresh store-assigned
    /// id; the candidate's own id is ignored.
    pub fn import(&self, candidates: &[MovieCandidate], overwrite_duplicates: bool) -> ImportReport {
        let mut report = ImportReport::default();

        for candidate in candidates {
            match self.import_one(candidate, overwrite_duplicates) {
                Ok(ImportAction::Applied) => report.success += 1,
                Ok(ImportAction::Skipped) => report.skipped += 1,
                Err(e) => {
                    log::error!("import of \"{}\" failed: {}", candidate.title, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    fn import_one(
        &self,
        candidate: &MovieCandidate,
        overwrite_duplicates: bool,
    ) -> AppResult<ImportAction> {
        let existing_id = match candidate.id {
            Some(id) if self.movie_repo.exists(id)? => Some(id),
            _ => None,
        };

        match existing_id {
            Some(id) if overwrite_duplicates => {
                self.movie_repo.update(&candidate.as_movie(id))?;
                Ok(ImportAction::Applied)
            }
            Some(_) => Ok(ImportAction::Skipped),
            None => {
                self.movie_repo.insert(&candidate.as_draft())?;
                Ok(ImportAction::Applied)
            }
        }
    }

    /// Render an exported snapshot as interchange JSON
    pub fn serialize_snapshot(movies: &[Movie]) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(movies)?)
    }

    /// Parse interchange JSON into candidates; malformed payloads are the
    /// caller's validation error, surfaced here as a serialization failure
    pub fn parse_candidates(json: &str) -> AppResult<Vec<MovieCandidate>> {
        Ok(serde_json::from_str(json)?)
    }
}
