// src/domain/statistics.rs
//
// Derived reporting data. Statistics are NEVER a source of truth and are
// recomputed from the current snapshot on every call.

use serde::{Deserialize, Serialize};

/// How many records carry a given category, for the category report.
/// Categories with no records do not appear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Dashboard totals: overall record count plus one count per watch status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: i64,
    pub watched: i64,
    pub to_watch: i64,
    pub favorite: i64,
}

/// A release year whose favorite count exceeds 130% of the mean
/// count-per-year across all years with at least one favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteYearOutlier {
    pub release_year: i32,
    pub favorite_count: i64,
}
