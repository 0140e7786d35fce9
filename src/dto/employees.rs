use serde::Deserialize;

use crate::domain::department::Department;
use crate::domain::employee::Employee;
use crate::pagination::Paginated;

/// Query parameters accepted by the employees list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Page number requested by the pagination control, 1-based.
    pub page: Option<usize>,
}

/// Data required to render the employees list template.
pub struct ListPageData {
    /// Employees to show as cards, in the order the backend returned them.
    pub employees: Paginated<Employee>,
    /// Whether the session may see the add-employee affordance.
    pub is_admin: bool,
}

/// Data required to render the employee form template.
pub struct FormPageData {
    /// Departments available in the select control.
    pub departments: Vec<Department>,
}
