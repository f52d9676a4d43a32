//! Ledger entities and the ports the application layer depends on.

pub mod account;
pub mod id;
pub mod ports;
pub mod transaction;
