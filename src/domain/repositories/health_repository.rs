//! Repository trait for health checks.

use crate::error::AppError;
use async_trait::async_trait;

/// Connectivity probe for the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
