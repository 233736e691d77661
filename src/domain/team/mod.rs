//! Teams.

pub mod client;
pub mod wire;

pub use client::Teams;
pub use wire::CreateTeam;
