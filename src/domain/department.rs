use serde::{Deserialize, Serialize};

/// Reference data used to populate the department select.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}
