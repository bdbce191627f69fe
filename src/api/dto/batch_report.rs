//! Turns a committed batch into the response envelope.

use axum::http::StatusCode;

use crate::api::dto::message::{ApiMessage, Outcome};
use crate::domain::entities::{BatchOp, BatchResult, BatchStatus};
use crate::error::AppError;

/// Classifies a batch result into status code and payload.
///
/// | batch     | insert                 | delete                 |
/// |-----------|------------------------|------------------------|
/// | all ok    | `201` `success`        | `200` `success`        |
/// | mixed     | `201` `partial` + list | `200` `partial` + list |
/// | all fail  | `409` `error`          | `404` `error`          |
pub fn classify(result: &BatchResult) -> ApiMessage {
    let wording = Wording::for_op(result.op);

    match result.status() {
        BatchStatus::Failure => {
            ApiMessage::new(Outcome::Error, wording.all_failed, wording.failure_code)
        }
        BatchStatus::Success => {
            ApiMessage::new(Outcome::Success, wording.all_applied, wording.success_code)
        }
        BatchStatus::Partial => {
            let errors = result
                .failed
                .iter()
                .filter_map(AppError::from_outcome)
                .map(|e| e.to_message())
                .collect();

            ApiMessage::new(Outcome::Partial, wording.some_failed, wording.success_code)
                .with_errors(errors)
        }
    }
}

struct Wording {
    success_code: StatusCode,
    failure_code: StatusCode,
    all_applied: &'static str,
    some_failed: &'static str,
    all_failed: &'static str,
}

impl Wording {
    fn for_op(op: BatchOp) -> Self {
        match op {
            BatchOp::Insert => Self {
                success_code: StatusCode::CREATED,
                failure_code: StatusCode::CONFLICT,
                all_applied: "Successfully created all of the domains.",
                some_failed: "Some of the domains are already in the database.",
                all_failed: "All of the domains are already in the database.",
            },
            BatchOp::Delete => Self {
                success_code: StatusCode::OK,
                failure_code: StatusCode::NOT_FOUND,
                all_applied: "Successfully removed all of the specified domains.",
                some_failed: "Some of the domains aren't in the database.",
                all_failed: "All of the domains aren't in the database.",
            },
        }
    }
}
