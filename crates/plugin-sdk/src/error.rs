//! Errors reported by host adapters.
//!
//! The navigator itself treats most host failures as "nothing to show";
//! these variants exist so adapters can say what went wrong and so the
//! toolbar can refuse malformed trees.

use thiserror::Error;

/// Failure raised by a host-side service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The content store could not run a query.
    #[error("content query failed: {0}")]
    QueryFailed(String),

    /// A node referenced a parent that has not been added yet.
    #[error("node '{id}' references unknown parent '{parent}'")]
    UnknownParent { id: String, parent: String },

    /// The host declined the request.
    #[error("rejected by host: {0}")]
    Rejected(String),
}

/// Result type alias using HostError.
pub type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_parent_message_names_both_ids() {
        let err = HostError::UnknownParent {
            id: "bdn-page-4".into(),
            parent: "bdn-pages".into(),
        };
        assert_eq!(
            err.to_string(),
            "node 'bdn-page-4' references unknown parent 'bdn-pages'"
        );
    }

    #[test]
    fn query_failed_message() {
        let err = HostError::QueryFailed("connection reset".into());
        assert_eq!(err.to_string(), "content query failed: connection reset");
    }
}
