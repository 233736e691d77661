//! Review links — shareable review pages over a set of assets.

pub mod client;
pub mod wire;

pub use client::ReviewLinks;
pub use wire::{CreateReviewLink, UpdateReviewLink};
