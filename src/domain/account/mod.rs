//! Account-scoped operations.

pub mod client;

pub use client::Accounts;
