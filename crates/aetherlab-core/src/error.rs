//! Error types for AetherLab

use thiserror::Error;

use crate::cases::CaseError;
use crate::contact::ContactError;

/// Top-level error type for AetherLab operations.
///
/// Every variant is recoverable: the UI shows it inline and waits for the
/// visitor to correct their input or pick another case.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Contact form rejected its input
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Case study could not be resolved
    #[error(transparent)]
    Case(#[from] CaseError),

    /// Path does not belong to any known route
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
