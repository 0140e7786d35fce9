use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::backend::RestBackend;
use crate::dto::employees::ListQuery;
use crate::forms::employee::EmployeeForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, employees as employees_service};

#[get("/admin/employees")]
pub async fn show_employees(
    query: web::Query<ListQuery>,
    user: AuthenticatedUser,
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = employees_service::load_list_page(backend.get_ref(), &user, query.into_inner()).await;

    let mut context = base_context(
        &flash_messages,
        &user,
        "employees",
        &server_config.auth_service_url,
    );
    context.insert("employees", &data.employees);
    context.insert("is_admin", &data.is_admin);

    render_template(&tera, "employees/index.html", &context)
}

#[get("/admin/employees/create")]
pub async fn add_employee(
    user: AuthenticatedUser,
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employees_service::load_form_page(backend.get_ref(), &user).await {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "employees",
                &server_config.auth_service_url,
            );
            context.insert("departments", &data.departments);
            context.insert("form", &EmployeeForm::default());
            context.insert("errors", &HashMap::<String, String>::new());

            render_template(&tera, "employees/form.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Acesso negado.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the employee form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/employees/create")]
pub async fn create_employee(
    user: AuthenticatedUser,
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<EmployeeForm>,
) -> impl Responder {
    match employees_service::create_employee(backend.get_ref(), &user, &form).await {
        Ok(()) => {
            FlashMessage::success("Cadastrado com sucesso").send();
            redirect("/admin/employees")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Acesso negado.").send();
            redirect("/na")
        }
        Err(ServiceError::Validation(errors)) => {
            // Blocked submission: the form comes back with the entered
            // values and a message under each failing field.
            match employees_service::load_form_page(backend.get_ref(), &user).await {
                Ok(data) => {
                    let mut context = base_context(
                        &flash_messages,
                        &user,
                        "employees",
                        &server_config.auth_service_url,
                    );
                    context.insert("departments", &data.departments);
                    context.insert("form", &form);
                    context.insert("errors", &errors);

                    render_template(&tera, "employees/form.html", &context)
                }
                Err(err) => {
                    log::error!("Failed to reload the employee form: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(err) => {
            log::error!("Failed to create employee: {err}");
            FlashMessage::error("Erro ao cadastrar funcionário.").send();
            redirect("/admin/employees/create")
        }
    }
}
