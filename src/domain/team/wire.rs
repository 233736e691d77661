//! Request wire types for team operations.

use serde::Serialize;

/// Parameters for creating a team under an account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeam {
    pub name: String,
}
