use thiserror::Error;

use crate::core::TaxBandError;

/// Rejected projection input, named after the CLI flag (or query key) at fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{flag} must be {requirement}")]
    Invalid {
        flag: &'static str,
        requirement: String,
    },
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("--tax-bands: {0}")]
    TaxBands(#[from] TaxBandError),
}

impl InputError {
    pub(crate) fn invalid(flag: &'static str, requirement: impl Into<String>) -> Self {
        InputError::Invalid {
            flag,
            requirement: requirement.into(),
        }
    }
}
