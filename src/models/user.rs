use serde::{Deserialize, Serialize};

// Identity handed back by the auth collaborator for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
    pub role: Option<String>,
}
