//! Error responses.
//!
//! Missing or malformed parameters map to 400 Bad Request; well-formed
//! requests that break a business rule map to 422 Unprocessable Entity.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::observability::metrics;
use crate::quoting::{Violation, ViolationKind};

/// JSON body returned for a rejected quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub field: String,
    pub message: String,
}

/// A violation on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub Violation);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

impl From<Violation> for ApiError {
    fn from(violation: Violation) -> Self {
        Self(violation)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        metrics::record_violation(kind);
        let body = ErrorBody {
            kind: kind.as_str().to_string(),
            field: self.0.field().to_string(),
            message: self.0.to_string(),
        };
        (status_for(kind), Json(body)).into_response()
    }
}

fn status_for(kind: ViolationKind) -> StatusCode {
    if kind.is_malformed() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let missing = ApiError(Violation::MissingField { field: "price" });
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let brand = ApiError(Violation::DisallowedBrand {
            value: "CHINESE_CRAP".into(),
            allowed: vec!["MAN".into()],
        });
        assert_eq!(brand.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(brand.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
