//! Store error model.

use shoplist_core::DomainError;

/// Failure of a call against the item store.
///
/// `Clone` because fetch failures are published to every list subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    pub(crate) fn network(err: impl core::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn parse(err: impl core::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }

    /// HTTP status of a rejected request, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(status, _) => Some(*status),
            _ => None,
        }
    }
}
