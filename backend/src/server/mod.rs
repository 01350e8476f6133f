//! Actix application assembly: routes, middleware, and the listening server.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpServer, web};
use dinos::Trace;
use dinos::domain::Error;
use dinos::inbound::http::health::{HealthState, live, ready};
use dinos::inbound::http::state::HttpState;
use dinos::inbound::http::{ApiResult, api_scope};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

/// Unmatched routes answer with the JSON error envelope.
async fn route_not_found(req: HttpRequest) -> ApiResult<web::Json<()>> {
    Err(Error::not_found(format!("no route for {} {}", req.method(), req.path())))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    // Swagger UI is a development aid and is left out of release builds.
    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", dinos::ApiDoc::openapi()),
    );

    app.default_service(web::to(route_not_found))
}

/// Bind `config.bind_addr` and start serving.
///
/// Readiness flips to healthy once the socket is bound.
///
/// # Errors
/// Returns the [`std::io::Error`] raised when binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    #[cfg(feature = "metrics")]
    let prometheus = config.prometheus.clone();
    let workers_health = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(workers_health.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(actix_web::middleware::Condition::from_option(
            prometheus.clone(),
        ));

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
