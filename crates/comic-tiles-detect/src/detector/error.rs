/// Errors from loading or validating detector parameters.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid parameter {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ParamsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
