//! Route handlers.

pub mod dashboard;
pub mod graph;
pub mod node;
pub mod stats;

use axum::http::StatusCode;

use lendgraph_core::LendError;

/// Map domain errors to HTTP responses.
///
/// NotFound and unknown labels are client-facing 4xx; driver failures are
/// 503 with no retry here.
pub(crate) fn error_response(err: LendError) -> (StatusCode, String) {
    let status = match &err {
        LendError::NodeNotFound { .. } => StatusCode::NOT_FOUND,
        LendError::UnknownLabel(_) => StatusCode::BAD_REQUEST,
        LendError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        LendError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, msg) = error_response(LendError::not_found("Borrower", "No Such Co"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Borrower 'No Such Co' not found");
    }

    #[test]
    fn unknown_label_maps_to_400() {
        let (status, _) = error_response(LendError::UnknownLabel("Fund".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_maps_to_503() {
        let (status, _) = error_response(LendError::unavailable("connection refused"));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn malformed_maps_to_500() {
        let (status, _) = error_response(LendError::malformed("bad record"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
