//! HTTP inbound adapter exposing REST endpoints.

pub mod animals;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod trace;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Build the versioned `/api/v1` scope with every animal endpoint and the
/// JSON extractor configuration they rely on.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use dinos::inbound::http::{api_scope, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(animals::create_animal)
        .service(animals::list_animals)
        .service(animals::get_animal)
        .service(animals::update_animal)
        .service(animals::delete_animal)
}
