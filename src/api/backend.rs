use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::api::errors::ApiResult;
use crate::api::{DepartmentReader, EmployeeListQuery, EmployeeReader, EmployeeWriter, Page};
use crate::domain::department::Department;
use crate::domain::employee::{Employee, NewEmployee};
use crate::models::config::ServerConfig;

/// HTTP client for the employees REST backend.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(server_config: &ServerConfig) -> Self {
        Self::new(
            &server_config.backend_api_url,
            server_config.backend_api_token.clone(),
        )
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(format!("{}{path}", self.base_url)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(format!("{}{path}", self.base_url)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl DepartmentReader for RestBackend {
    async fn list_departments(&self) -> ApiResult<Vec<Department>> {
        let departments = self
            .get("/departments")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Department>>()
            .await?;

        Ok(departments)
    }
}

#[async_trait]
impl EmployeeReader for RestBackend {
    async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<Page<Employee>> {
        let mut request = self.get("/employees");

        if let Some(pagination) = &query.pagination {
            request = request.query(&[("page", pagination.page), ("size", pagination.per_page)]);
        }

        let page = request
            .send()
            .await?
            .error_for_status()?
            .json::<Page<Employee>>()
            .await?;

        Ok(page)
    }
}

#[async_trait]
impl EmployeeWriter for RestBackend {
    async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee> {
        let created = self
            .post("/employees")
            .json(new_employee)
            .send()
            .await?
            .error_for_status()?
            .json::<Employee>()
            .await?;

        Ok(created)
    }
}
