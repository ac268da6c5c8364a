use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::employee::{EmployeeUpdate, NewEmployee};
use crate::service::EmployeeService;

pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.list()?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.get(&employee_id.into_inner())?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.create(new_employee.into_inner())?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.update(&employee_id.into_inner(), updates.into_inner())?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = employee_id.into_inner();
    service.delete(&employee_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee {} deleted successfully", employee_id),
    })))
}
