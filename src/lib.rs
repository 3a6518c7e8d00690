//! teller - a minimal banking ledger with an atomic balance-mutation engine
//!
//! Accounts hold a non-negative balance in a single currency. Deposits,
//! withdrawals and two-account transfers are applied through
//! [`engine::BalanceMutator`] inside all-or-nothing storage transactions, so
//! concurrent operations never lose updates, observe partial writes, or
//! deadlock.
//!
//! Layers, bottom up:
//! - [`domain`]: account model, pure balance arithmetic, request validation
//! - [`storage`]: transactional key-value contract over account rows, plus a
//!   concurrent in-memory implementation
//! - [`engine`]: the balance-mutation engine owning all invariant checks
//! - [`service`]: public operation surface (create, get, deposit, withdraw,
//!   transfer)
//! - [`api`]: thin transport-agnostic boundary mapping service results to
//!   status codes

pub mod api;
pub mod domain;
pub mod engine;
pub mod prelude;
pub mod service;
pub mod storage;
