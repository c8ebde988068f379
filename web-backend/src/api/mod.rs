use actix_web::{web, Scope};

pub mod results;
pub mod templates;

pub fn create_api_router() -> Scope {
    web::scope("/api")
        .service(templates_routes())
        .service(results_routes())
}

fn templates_routes() -> Scope {
    web::scope("/templates").configure(templates::configure_template_routes)
}

fn results_routes() -> Scope {
    web::scope("/results").configure(results::configure_result_routes)
}
