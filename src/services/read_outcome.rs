// src/services/read_outcome.rs
use crate::error::AppResult;

/// Result of a read or aggregate operation.
///
/// Reads never fail to their caller: a storage error degrades to a fallback
/// value (empty list, zeroed totals) that is indistinguishable from "no data"
/// on screen. The diagnostic keeps the failure observable for tests and
/// maintenance surfaces instead of living only in the log.
#[derive(Debug, Clone)]
pub struct ReadOutcome<T> {
    value: T,
    diagnostic: Option<String>,
}

impl<T> ReadOutcome<T> {
    /// A read that hit storage successfully
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    /// A read that failed and fell back to a substitute value
    pub fn degraded(fallback: T, diagnostic: impl Into<String>) -> Self {
        Self {
            value: fallback,
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// Convert a repository result, logging the failure path
    pub fn from_result(operation: &str, result: AppResult<T>, fallback: T) -> Self {
        match result {
            Ok(value) => Self::clean(value),
            Err(e) => {
                log::error!("{} failed: {}", operation, e);
                Self::degraded(fallback, e.to_string())
            }
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_clean_outcome_carries_no_diagnostic() {
        let outcome = ReadOutcome::clean(vec![1, 2, 3]);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value(), &vec![1, 2, 3]);
        assert_eq!(outcome.diagnostic(), None);
    }

    #[test]
    fn test_from_result_degrades_on_error() {
        let result: AppResult<Vec<i32>> = Err(AppError::Other("storage offline".to_string()));
        let outcome = ReadOutcome::from_result("list", result, Vec::new());
        assert!(outcome.is_degraded());
        assert!(outcome.value().is_empty());
        assert!(outcome.diagnostic().unwrap().contains("storage offline"));
    }
}
