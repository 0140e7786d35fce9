use async_trait::async_trait;
use mockall::mock;

use staff_console::api::errors::{ApiError, ApiResult};
use staff_console::api::{
    DepartmentReader, EmployeeListQuery, EmployeeReader, EmployeeWriter, Page,
};
use staff_console::domain::department::Department;
use staff_console::domain::employee::{Employee, NewEmployee};
use staff_console::dto::employees::ListQuery;
use staff_console::forms::employee::EmployeeForm;
use staff_console::models::auth::AuthenticatedUser;
use staff_console::services::ServiceError;
use staff_console::services::employees as employees_service;

mock! {
    pub Backend {}

    #[async_trait]
    impl DepartmentReader for Backend {
        async fn list_departments(&self) -> ApiResult<Vec<Department>>;
    }

    #[async_trait]
    impl EmployeeReader for Backend {
        async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<Page<Employee>>;
    }

    #[async_trait]
    impl EmployeeWriter for Backend {
        async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee>;
    }
}

fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        exp: 0,
    }
}

fn admin() -> AuthenticatedUser {
    user_with_roles(&["ROLE_ADMIN", "ROLE_OPERATOR"])
}

fn operator() -> AuthenticatedUser {
    user_with_roles(&["ROLE_OPERATOR"])
}

fn department(id: i32, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
    }
}

fn employee(id: i32, name: &str, email: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        department: department(2, "TI"),
    }
}

fn valid_form() -> EmployeeForm {
    EmployeeForm {
        name: "Maria".to_string(),
        email: "a@b.com".to_string(),
        department: "2".to_string(),
    }
}

#[actix_web::test]
async fn list_requests_fixed_size_page_and_keeps_order() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_employees()
        .withf(|query| {
            matches!(&query.pagination, Some(p) if p.page == 1 && p.per_page == 4)
        })
        .times(1)
        .returning(|_| {
            Ok(Page {
                content: vec![
                    employee(3, "Bruno", "bruno@example.com"),
                    employee(1, "Ana", "ana@example.com"),
                ],
                number: 1,
                total_pages: 3,
            })
        });

    let data =
        employees_service::load_list_page(&backend, &operator(), ListQuery { page: Some(2) }).await;

    let names: Vec<&str> = data
        .employees
        .items
        .iter()
        .map(|employee| employee.name.as_str())
        .collect();
    assert_eq!(names, ["Bruno", "Ana"]);
    assert_eq!(data.employees.page, 2);
}

#[actix_web::test]
async fn list_defaults_to_the_first_page() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_employees()
        .withf(|query| matches!(&query.pagination, Some(p) if p.page == 0 && p.per_page == 4))
        .times(1)
        .returning(|_| {
            Ok(Page {
                content: vec![],
                number: 0,
                total_pages: 0,
            })
        });

    let data = employees_service::load_list_page(&backend, &operator(), ListQuery::default()).await;

    assert!(data.employees.items.is_empty());
    assert_eq!(data.employees.page, 1);
}

#[actix_web::test]
async fn list_read_failure_renders_the_empty_state() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_employees()
        .times(1)
        .returning(|_| Err(ApiError::Request("connection refused".to_string())));

    let data =
        employees_service::load_list_page(&backend, &operator(), ListQuery { page: Some(3) }).await;

    assert!(data.employees.items.is_empty());
    assert!(data.employees.pages.is_empty());
}

#[actix_web::test]
async fn add_affordance_follows_the_admin_role() {
    for (user, expected) in [(admin(), true), (operator(), false)] {
        let mut backend = MockBackend::new();
        backend.expect_list_employees().returning(|_| {
            Ok(Page {
                content: vec![],
                number: 0,
                total_pages: 0,
            })
        });

        let data = employees_service::load_list_page(&backend, &user, ListQuery::default()).await;

        assert_eq!(data.employees.items.len(), 0);
        assert_eq!(data.is_admin, expected);
    }
}

#[actix_web::test]
async fn form_page_fetches_departments_once() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_departments()
        .times(1)
        .returning(|| Ok(vec![department(1, "Financeiro"), department(2, "TI")]));

    let data = employees_service::load_form_page(&backend, &admin())
        .await
        .unwrap();

    assert_eq!(data.departments.len(), 2);
    assert_eq!(data.departments[0].name, "Financeiro");
}

#[actix_web::test]
async fn form_page_requires_the_admin_role() {
    let backend = MockBackend::new();

    let result = employees_service::load_form_page(&backend, &operator()).await;

    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[actix_web::test]
async fn form_page_survives_a_departments_read_failure() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_departments()
        .times(1)
        .returning(|| Err(ApiError::Request("timeout".to_string())));

    let data = employees_service::load_form_page(&backend, &admin())
        .await
        .unwrap();

    assert!(data.departments.is_empty());
}

#[actix_web::test]
async fn create_blocks_on_an_empty_name() {
    // No expectations: touching the backend at all would panic the mock.
    let backend = MockBackend::new();
    let form = EmployeeForm {
        name: String::new(),
        ..valid_form()
    };

    let result = employees_service::create_employee(&backend, &admin(), &form).await;

    let Err(ServiceError::Validation(errors)) = result else {
        panic!("expected a blocked submission");
    };
    assert_eq!(
        errors.get("name").map(String::as_str),
        Some("Campo obrigatório")
    );
}

#[actix_web::test]
async fn create_blocks_on_a_malformed_email() {
    let backend = MockBackend::new();
    let form = EmployeeForm {
        email: "not-an-email".to_string(),
        ..valid_form()
    };

    let result = employees_service::create_employee(&backend, &admin(), &form).await;

    let Err(ServiceError::Validation(errors)) = result else {
        panic!("expected a blocked submission");
    };
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("Email inválido")
    );
}

#[actix_web::test]
async fn create_blocks_without_a_department_selection() {
    let backend = MockBackend::new();
    let form = EmployeeForm {
        department: String::new(),
        ..valid_form()
    };

    let result = employees_service::create_employee(&backend, &admin(), &form).await;

    let Err(ServiceError::Validation(errors)) = result else {
        panic!("expected a blocked submission");
    };
    assert!(errors.contains_key("department"));
}

#[actix_web::test]
async fn create_rejects_a_department_that_is_not_available() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_departments()
        .times(1)
        .returning(|| Ok(vec![department(2, "TI")]));

    let form = EmployeeForm {
        department: "99".to_string(),
        ..valid_form()
    };

    let result = employees_service::create_employee(&backend, &admin(), &form).await;

    let Err(ServiceError::Validation(errors)) = result else {
        panic!("expected a blocked submission");
    };
    assert_eq!(
        errors.get("department").map(String::as_str),
        Some("Campo obrigatório")
    );
}

#[actix_web::test]
async fn valid_submission_creates_exactly_one_employee() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_departments()
        .times(1)
        .returning(|| Ok(vec![department(1, "Financeiro"), department(2, "TI")]));
    backend
        .expect_create_employee()
        .withf(|new_employee| {
            new_employee.name == "Maria"
                && new_employee.email == "a@b.com"
                && new_employee.department.id == 2
        })
        .times(1)
        .returning(|_| Ok(employee(7, "Maria", "a@b.com")));

    let result = employees_service::create_employee(&backend, &admin(), &valid_form()).await;

    assert!(result.is_ok());
}

#[actix_web::test]
async fn create_requires_the_admin_role() {
    let backend = MockBackend::new();

    let result = employees_service::create_employee(&backend, &operator(), &valid_form()).await;

    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[actix_web::test]
async fn create_surfaces_a_backend_write_failure() {
    let mut backend = MockBackend::new();
    backend
        .expect_list_departments()
        .returning(|| Ok(vec![department(2, "TI")]));
    backend
        .expect_create_employee()
        .times(1)
        .returning(|_| Err(ApiError::Request("500 Internal Server Error".to_string())));

    let result = employees_service::create_employee(&backend, &admin(), &valid_form()).await;

    assert!(matches!(result, Err(ServiceError::Api(_))));
}
