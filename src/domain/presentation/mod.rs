//! Presentation links — single-asset share pages.

pub mod client;
pub mod wire;

pub use client::Presentations;
pub use wire::CreatePresentation;
