use thiserror::Error;

#[derive(Debug, Error)]
pub enum StaffgenError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
}

/// Rejection of a generation request. Raised before any record is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRequest {
    #[error("request must be an object")]
    NotAnObject,

    #[error("count must be a positive integer, got {0}")]
    Count(String),

    #[error("ageRange must be an object with numeric minAge and maxAge")]
    MissingAgeRange,

    #[error("ageRange.{field} must be a finite number")]
    AgeBound { field: &'static str },

    #[error("ageRange.minAge must not be negative, got {0}")]
    NegativeMinAge(f64),

    #[error("ageRange.maxAge ({max}) must not be less than minAge ({min})")]
    InvertedAgeRange { min: f64, max: f64 },

    #[error("ageRange.maxAge {0} puts birth dates outside the supported calendar")]
    AgeOutOfRange(f64),
}

impl InvalidRequest {
    /// Name of the request field that failed validation, as it appears in JSON.
    pub fn field(&self) -> &'static str {
        match self {
            InvalidRequest::NotAnObject => "request",
            InvalidRequest::Count(_) => "count",
            InvalidRequest::MissingAgeRange => "ageRange",
            InvalidRequest::AgeBound { field } => field,
            InvalidRequest::NegativeMinAge(_) => "minAge",
            InvalidRequest::InvertedAgeRange { .. } => "maxAge",
            InvalidRequest::AgeOutOfRange(_) => "maxAge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_display() {
        let err = InvalidRequest::InvertedAgeRange {
            min: 30.0,
            max: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "ageRange.maxAge (20) must not be less than minAge (30)"
        );
        assert_eq!(err.field(), "maxAge");
    }

    #[test]
    fn invalid_request_converts_into_app_error() {
        let err: StaffgenError = InvalidRequest::Count("0".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid request: count must be a positive integer, got 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaffgenError>();
        assert_send_sync::<InvalidRequest>();
    }
}
