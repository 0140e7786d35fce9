use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::api::{DepartmentReader, EmployeeListQuery, EmployeeReader, EmployeeWriter};
use crate::dto::employees::{FormPageData, ListPageData, ListQuery};
use crate::forms::employee::{EmployeeForm, field_errors};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of employees for the list screen. Infallible: a failed
/// read degrades to the empty state rather than an error page.
///
/// The pagination control is 1-based while the backend page index is
/// zero-based; the current page shown is the index the backend reported.
pub async fn load_list_page<A>(api: &A, user: &AuthenticatedUser, query: ListQuery) -> ListPageData
where
    A: EmployeeReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);

    let list_query = EmployeeListQuery::new().paginate(page - 1, DEFAULT_PAGE_SIZE);

    // A failed read only reaches the log; the screen renders its empty state.
    let employees = match api.list_employees(list_query).await {
        Ok(envelope) => Paginated::new(envelope.content, envelope.number + 1, envelope.total_pages),
        Err(err) => {
            log::error!("Failed to list employees: {err}");
            Paginated::new(Vec::new(), page, 0)
        }
    };

    ListPageData {
        employees,
        is_admin: check_role(SERVICE_ADMIN_ROLE, &user.roles),
    }
}

/// Loads the departments that populate the select on the employee form.
pub async fn load_form_page<A>(api: &A, user: &AuthenticatedUser) -> ServiceResult<FormPageData>
where
    A: DepartmentReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    // Same contract as the list read: log the failure and render the select
    // without options.
    let departments = match api.list_departments().await {
        Ok(departments) => departments,
        Err(err) => {
            log::error!("Failed to list departments: {err}");
            Vec::new()
        }
    };

    Ok(FormPageData { departments })
}

/// Validates the employee form and submits the new record to the backend.
pub async fn create_employee<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &EmployeeForm,
) -> ServiceResult<()>
where
    A: DepartmentReader + EmployeeWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(field_errors(&errors)));
    }

    let departments = api.list_departments().await.map_err(ServiceError::from)?;

    let new_employee = match form.to_new_employee(&departments) {
        Some(new_employee) => new_employee,
        None => {
            // The posted identifier no longer names an available department.
            return Err(ServiceError::Validation(
                [("department".to_string(), "Campo obrigatório".to_string())].into(),
            ));
        }
    };

    api.create_employee(&new_employee).await.map_err(|err| {
        log::error!("Failed to create employee: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}
