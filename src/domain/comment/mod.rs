//! Comments on assets.

pub mod client;
pub mod wire;

pub use client::Comments;
pub use wire::CreateComment;
