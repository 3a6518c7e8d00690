use serde::Serialize;

use crate::engine::MutationError;
use crate::service::ServiceError;
use crate::storage::StorageError;

/// Machine-readable error payload with a stable kind identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Body of an API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Body<T> {
    Payload(T),
    Error(ErrorBody),
    Empty,
}

/// Transport-agnostic response envelope.
///
/// An HTTP adapter maps this one-to-one: `status` becomes the status code
/// and the body is serialized as-is. Keeping the envelope free of any HTTP
/// framework keeps the whole routing layer out of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    status: u16,
    body: Body<T>,
}

impl<T> ApiResponse<T> {
    /// 200 with a payload
    pub fn ok(payload: T) -> Self {
        Self {
            status: 200,
            body: Body::Payload(payload),
        }
    }

    /// 201 with the created resource
    pub fn created(payload: T) -> Self {
        Self {
            status: 201,
            body: Body::Payload(payload),
        }
    }

    /// 200 with no body, for operations that return nothing
    pub fn ok_empty() -> Self {
        Self {
            status: 200,
            body: Body::Empty,
        }
    }

    /// 404 for a lookup miss, which is not a service error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: 404,
            body: Body::Error(ErrorBody {
                error: "account_not_found",
                message: message.into(),
            }),
        }
    }

    /// Map a service failure to its status code and error body
    pub fn failure(err: ServiceError) -> Self {
        let (status, kind) = status_for(&err);
        Self {
            status,
            body: Body::Error(ErrorBody {
                error: kind,
                message: err.to_string(),
            }),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Body<T> {
        &self.body
    }
}

/// Status code and error kind for each caller-visible failure
pub fn status_for(err: &ServiceError) -> (u16, &'static str) {
    match err {
        ServiceError::Validation(_) => (400, "validation_error"),
        ServiceError::Mutation(err) => match err {
            MutationError::AccountNotFound { .. } => (404, "account_not_found"),
            MutationError::InsufficientBalance { .. } => (403, "insufficient_balance"),
            MutationError::CurrencyMismatch { .. } => (409, "currency_mismatch"),
            MutationError::Overflow { .. } => (409, "balance_overflow"),
            MutationError::NegativeAmount => (400, "validation_error"),
            MutationError::Storage(err) => storage_status(err),
        },
        ServiceError::Storage(err) => storage_status(err),
    }
}

fn storage_status(err: &StorageError) -> (u16, &'static str) {
    match err {
        StorageError::DuplicateKey(_) => (409, "duplicate_account"),
        StorageError::Conflict => (409, "conflict"),
        StorageError::Unavailable => (503, "storage_unavailable"),
        // A missing row inside a mutation means the engine's prior read was
        // violated; that is an internal fault, not a caller error
        StorageError::NotFound(_) => (500, "internal_error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, Deposit};
    use crate::engine::AccountRole;

    #[test]
    fn validation_maps_to_400() {
        let err = ServiceError::from(
            Deposit {
                amount: -1,
                currency: "USD".to_string(),
            }
            .validate()
            .unwrap_err(),
        );

        assert_eq!(status_for(&err), (400, "validation_error"));
    }

    #[test]
    fn mutation_errors_map_to_expected_statuses() {
        let id = AccountId::from("a-1");

        let not_found = ServiceError::from(MutationError::AccountNotFound {
            role: AccountRole::Source,
            id: id.clone(),
        });
        assert_eq!(status_for(&not_found), (404, "account_not_found"));

        let insufficient =
            ServiceError::from(MutationError::InsufficientBalance { id: id.clone() });
        assert_eq!(status_for(&insufficient), (403, "insufficient_balance"));

        let mismatch = ServiceError::from(MutationError::CurrencyMismatch { id });
        assert_eq!(status_for(&mismatch), (409, "currency_mismatch"));
    }

    #[test]
    fn storage_errors_map_to_expected_statuses() {
        assert_eq!(
            status_for(&ServiceError::Storage(StorageError::Unavailable)),
            (503, "storage_unavailable")
        );
        assert_eq!(
            status_for(&ServiceError::Storage(StorageError::Conflict)),
            (409, "conflict")
        );
        assert_eq!(
            status_for(&ServiceError::Storage(StorageError::DuplicateKey(
                AccountId::from("a-1")
            ))),
            (409, "duplicate_account")
        );
    }

    #[test]
    fn failure_carries_error_message() {
        let id = AccountId::from("a-1");
        let response: ApiResponse<()> =
            ApiResponse::failure(ServiceError::from(MutationError::InsufficientBalance { id }));

        assert_eq!(response.status(), 403);
        assert_eq!(
            response.body(),
            &Body::Error(ErrorBody {
                error: "insufficient_balance",
                message: "Account has not enough money on balance: a-1".to_string(),
            })
        );
    }

    #[test]
    fn success_constructors_set_statuses() {
        assert_eq!(ApiResponse::ok(1).status(), 200);
        assert_eq!(ApiResponse::created(1).status(), 201);
        assert_eq!(ApiResponse::<()>::ok_empty().status(), 200);
        assert_eq!(ApiResponse::<()>::not_found("gone").status(), 404);
    }
}
