use serde::{Deserialize, Serialize};

// One entry of the shared categories listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}
