//! Projects.

pub mod client;
pub mod wire;

pub use client::Projects;
pub use wire::CreateProject;
