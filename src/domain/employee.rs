use serde::{Deserialize, Serialize};

use crate::domain::department::Department;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Department,
}

/// Payload for creating an employee; the backend assigns the identifier.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: Department,
}

impl NewEmployee {
    #[must_use]
    pub fn new(name: String, email: String, department: Department) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            department,
        }
    }
}
