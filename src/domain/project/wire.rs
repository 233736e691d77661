//! Request wire types for project operations.

use serde::Serialize;

/// Parameters for creating a project under a team.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    pub name: String,
    /// Restrict the project to invited collaborators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}
