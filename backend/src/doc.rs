//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the animal endpoints, the health probes, and the
//! schema wrappers that describe domain errors without coupling domain types
//! to utoipa. The document backs Swagger UI (debug builds) and the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::animals::{AnimalRequestBody, AnimalResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FieldDetailsSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dinos animal registry API",
        description = "HTTP interface for storing and reading animal records, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::animals::create_animal,
        crate::inbound::http::animals::list_animals,
        crate::inbound::http::animals::get_animal,
        crate::inbound::http::animals::update_animal,
        crate::inbound::http::animals::delete_animal,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AnimalRequestBody,
        AnimalResponseBody,
        ErrorSchema,
        ErrorCodeSchema,
        FieldDetailsSchema
    )),
    tags(
        (name = "animals", description = "Animal records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
