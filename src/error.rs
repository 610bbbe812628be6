use thiserror::Error;

use crate::input::InputError;
use crate::stats::fit::FitError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("fit failed: {0}")]
    Fit(#[from] FitError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
