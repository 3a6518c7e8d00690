//! Thin API boundary mapping service calls to transport-agnostic
//! request/response envelopes and status codes. Routing, marshaling and the
//! HTTP server itself live outside this crate.

pub mod response;

pub use response::{ApiResponse, Body, ErrorBody, status_for};

use crate::domain::{Account, AccountId, Deposit, NewAccount, Transfer, Withdrawal};
use crate::service::AccountService;
use crate::storage::AccountStore;

/// Handler surface for the bank account API
pub struct AccountApi<S: AccountStore> {
    service: AccountService<S>,
}

impl<S: AccountStore> AccountApi<S> {
    pub fn new(service: AccountService<S>) -> Self {
        Self { service }
    }

    /// POST /account
    pub async fn create_account(&self, body: NewAccount) -> ApiResponse<Account> {
        match self.service.create_account(body).await {
            Ok(account) => ApiResponse::created(account),
            Err(err) => ApiResponse::failure(err),
        }
    }

    /// GET /account/{id}
    pub async fn get_account(&self, id: &AccountId) -> ApiResponse<Account> {
        match self.service.get_account(id).await {
            Ok(Some(account)) => ApiResponse::ok(account),
            Ok(None) => ApiResponse::not_found(format!("Account not found: {id}")),
            Err(err) => ApiResponse::failure(err),
        }
    }

    /// POST /account/{id}/deposit
    pub async fn deposit(&self, id: &AccountId, body: Deposit) -> ApiResponse<()> {
        match self.service.deposit(id, body).await {
            Ok(()) => ApiResponse::ok_empty(),
            Err(err) => ApiResponse::failure(err),
        }
    }

    /// POST /account/{id}/withdraw
    pub async fn withdraw(&self, id: &AccountId, body: Withdrawal) -> ApiResponse<()> {
        match self.service.withdraw(id, body).await {
            Ok(()) => ApiResponse::ok_empty(),
            Err(err) => ApiResponse::failure(err),
        }
    }

    /// POST /account/{source}/transfer/{target}
    pub async fn transfer(
        &self,
        source_id: &AccountId,
        target_id: &AccountId,
        body: Transfer,
    ) -> ApiResponse<()> {
        match self.service.transfer(source_id, target_id, body).await {
            Ok(()) => ApiResponse::ok_empty(),
            Err(err) => ApiResponse::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::InMemoryAccountStore;

    fn api() -> AccountApi<InMemoryAccountStore> {
        AccountApi::new(AccountService::new(Arc::new(InMemoryAccountStore::new())))
    }

    fn usd(amount: i64) -> Deposit {
        Deposit {
            amount,
            currency: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn create_account_responds_201_with_account() {
        let api = api();

        let response = api
            .create_account(NewAccount {
                name: "Alice".to_string(),
            })
            .await;

        assert_eq!(response.status(), 201);
        let Body::Payload(account) = response.body() else {
            panic!("expected payload body");
        };
        assert_eq!(account.name(), "Alice");
        assert_eq!(account.balance(), 0);
    }

    #[tokio::test]
    async fn create_account_with_blank_name_responds_400() {
        let api = api();

        let response = api
            .create_account(NewAccount {
                name: " ".to_string(),
            })
            .await;

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn get_missing_account_responds_404() {
        let api = api();

        let response = api.get_account(&AccountId::from("nope")).await;

        assert_eq!(response.status(), 404);
        let Body::Error(body) = response.body() else {
            panic!("expected error body");
        };
        assert_eq!(body.error, "account_not_found");
    }

    #[tokio::test]
    async fn deposit_responds_200_with_empty_body() {
        let api = api();
        let created = api
            .create_account(NewAccount {
                name: "Alice".to_string(),
            })
            .await;
        let Body::Payload(account) = created.body() else {
            panic!("expected payload body");
        };

        let response = api.deposit(account.id(), usd(500)).await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), &Body::Empty);
    }

    #[tokio::test]
    async fn overdraw_responds_403() {
        let api = api();
        let created = api
            .create_account(NewAccount {
                name: "Alice".to_string(),
            })
            .await;
        let Body::Payload(account) = created.body() else {
            panic!("expected payload body");
        };

        let response = api
            .withdraw(
                account.id(),
                Withdrawal {
                    amount: 1,
                    currency: "USD".to_string(),
                },
            )
            .await;

        assert_eq!(response.status(), 403);
    }

    #[tokio::test]
    async fn transfer_with_wrong_currency_responds_409() {
        let api = api();
        let alice = api
            .create_account(NewAccount {
                name: "Alice".to_string(),
            })
            .await;
        let bob = api
            .create_account(NewAccount {
                name: "Bob".to_string(),
            })
            .await;
        let (Body::Payload(alice), Body::Payload(bob)) = (alice.body(), bob.body()) else {
            panic!("expected payload bodies");
        };
        api.deposit(alice.id(), usd(100)).await;

        let response = api
            .transfer(
                alice.id(),
                bob.id(),
                Transfer {
                    amount: 10,
                    currency: "EUR".to_string(),
                },
            )
            .await;

        assert_eq!(response.status(), 409);
        let Body::Error(body) = response.body() else {
            panic!("expected error body");
        };
        assert_eq!(body.error, "currency_mismatch");
    }
}
