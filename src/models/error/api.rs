use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single JSON:API problem object.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    pub status: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: "400".to_string(),
            title: "Bad Request".to_string(),
            detail: Some(detail.into()),
        }
    }

    /// The internal-error problem carries no detail. Causes are logged
    /// server-side and never echoed back to the caller.
    pub fn internal_error() -> Self {
        Self {
            status: "500".to_string(),
            title: "Internal Server Error".to_string(),
            detail: None,
        }
    }
}

/// The error document wrapper: `{"errors": [ ... ]}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProblemDocument {
    pub errors: Vec<Problem>,
}

impl ProblemDocument {
    pub fn new(problem: Problem) -> Self {
        Self {
            errors: vec![problem],
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ProblemDocument::new(Problem::bad_request(msg)))
            }
            ApiError::InternalError => HttpResponse::InternalServerError()
                .json(ProblemDocument::new(Problem::internal_error())),
        }
    }
}
