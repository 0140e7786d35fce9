//! The employees REST backend as an injected collaborator.

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::errors::ApiResult;
use crate::domain::department::Department;
use crate::domain::employee::{Employee, NewEmployee};

pub mod backend;
pub mod errors;

/// Pagination envelope returned by the employees endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of the page the server actually returned.
    pub number: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
pub struct Pagination {
    /// Zero-based page index requested from the backend.
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeListQuery {
    pub pagination: Option<Pagination>,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self { pagination: None }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[async_trait]
pub trait DepartmentReader {
    async fn list_departments(&self) -> ApiResult<Vec<Department>>;
}

#[async_trait]
pub trait EmployeeReader {
    async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<Page<Employee>>;
}

#[async_trait]
pub trait EmployeeWriter {
    async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_uses_camel_case_fields() {
        let body = r#"{
            "content": [
                {
                    "id": 1,
                    "name": "Ana",
                    "email": "ana@example.com",
                    "department": {"id": 2, "name": "TI"}
                }
            ],
            "number": 0,
            "totalPages": 5,
            "totalElements": 17,
            "size": 4
        }"#;

        let page: Page<Employee> = serde_json::from_str(body).unwrap();

        assert_eq!(page.number, 0);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Ana");
        assert_eq!(page.content[0].department.name, "TI");
    }

    #[test]
    fn list_query_defaults_to_backend_pagination() {
        assert!(EmployeeListQuery::new().pagination.is_none());

        let query = EmployeeListQuery::new().paginate(3, 4);
        let pagination = query.pagination.unwrap();
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.per_page, 4);
    }
}
