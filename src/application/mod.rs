//! Application layer: the operations callers drive.
//!
//! [`service::AccountService`] mutates one bound account and persists it through the
//! `AccountStore` port. [`ledger::Ledger`] opens accounts and binds services to them.

pub mod ledger;
pub mod service;
pub mod statement;
