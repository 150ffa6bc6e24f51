// report-generation-service/src/validation.rs

use crate::models::ReportRequest;
use thiserror::Error;

const MIN_CLIENT_NAME_LENGTH: usize = 2;

/// Why a report request was turned away. `Display` is the exact message
/// returned to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Invalid request data")]
    InvalidRequest,

    #[error("Client name must be at least 2 characters")]
    ClientNameTooShort,

    #[error("Report type is required")]
    MissingReportType,

    #[error("Valid year is required")]
    InvalidYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Rejection),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(rejection) => Err(rejection),
        }
    }
}

/// Decides whether a request can be rendered. Rules run in a fixed order and
/// the first failure wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, request: Option<&ReportRequest>) -> ValidationOutcome {
        let Some(request) = request else {
            return ValidationOutcome::Invalid(Rejection::InvalidRequest);
        };

        let client_name_len = request
            .client_name
            .as_deref()
            .map_or(0, |name| name.trim().chars().count());
        if client_name_len < MIN_CLIENT_NAME_LENGTH {
            return ValidationOutcome::Invalid(Rejection::ClientNameTooShort);
        }

        if is_blank(request.report_type_name.as_deref()) {
            return ValidationOutcome::Invalid(Rejection::MissingReportType);
        }

        if request.year <= 0 {
            return ValidationOutcome::Invalid(Rejection::InvalidYear);
        }

        ValidationOutcome::Valid
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
