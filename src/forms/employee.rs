use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::department::Department;
use crate::domain::employee::NewEmployee;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for creating an employee.
pub struct EmployeeForm {
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Campo obrigatório"),
        email(message = "Email inválido")
    )]
    pub email: String,
    /// Identifier of the selected department; empty when nothing is selected.
    #[serde(default)]
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub department: String,
}

impl EmployeeForm {
    /// Resolves the selected department against the fetched set and builds
    /// the record to submit. `None` when the selection does not name one of
    /// the available departments.
    pub fn to_new_employee(&self, departments: &[Department]) -> Option<NewEmployee> {
        let department_id = self.department.trim().parse::<i32>().ok()?;
        let department = departments
            .iter()
            .find(|department| department.id == department_id)?
            .clone();

        Some(NewEmployee::new(
            self.name.clone(),
            self.email.clone(),
            department,
        ))
    }
}

/// Flattens validation errors into one message per field for the template.
pub fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|error| error.message.clone())
                .map(|message| message.into_owned())
                .unwrap_or_else(|| "Campo inválido".to_string());

            (field.to_string(), message)
        })
        .collect()
}
