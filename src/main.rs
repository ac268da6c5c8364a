use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use staffdir_backend::handlers;
use staffdir_backend::service::EmployeeService;
use staffdir_backend::store::EmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let data_file =
        env::var("EMPLOYEE_DATA_FILE").unwrap_or_else(|_| "data/employees.json".to_string());
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let service = web::Data::new(EmployeeService::new(EmployeeStore::new(data_file.as_str())));

    info!(
        "Starting server at {} backed by {}",
        bind_address, data_file
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .service(
                web::resource("/employees")
                    .route(web::get().to(handlers::employee::list_employees))
                    .route(web::post().to(handlers::employee::create_employee)),
            )
            .service(
                web::resource("/employees/{id}")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::patch().to(handlers::employee::update_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
