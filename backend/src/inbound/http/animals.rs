//! Animal registry HTTP handlers.
//!
//! ```text
//! POST   /api/v1/animals
//! GET    /api/v1/animals
//! GET    /api/v1/animals/{id}
//! PUT    /api/v1/animals/{id}
//! DELETE /api/v1/animals/{id}
//! ```
//!
//! Request bodies keep every field optional so that absent or `null` values
//! surface as `missing_field` validation errors instead of opaque JSON
//! decoding failures.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Animal, AnimalDraft, AnimalId, AnimalName, Diet, Error, NewAnimal, Weight};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, animal_field_error, id_mismatch_error, parse_animal_id, require,
};

/// Request payload for creating or replacing an animal.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRequestBody {
    /// Optional identifier; generated by the database when omitted.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
    #[schema(example = "Tiger")]
    pub name: Option<String>,
    #[schema(example = 200)]
    pub weight: Option<i32>,
    #[schema(example = "carnivore")]
    pub diet: Option<String>,
}

/// Animal record returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub weight: i32,
    pub diet: String,
}

impl From<Animal> for AnimalResponseBody {
    fn from(value: Animal) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            weight: value.weight().get(),
            diet: value.diet().to_string(),
        }
    }
}

fn parse_draft(body: AnimalRequestBody) -> Result<AnimalDraft, Error> {
    let name = require(body.name, FieldName::NAME)?;
    let weight = require(body.weight, FieldName::WEIGHT)?;
    let diet = require(body.diet, FieldName::DIET)?;

    Ok(AnimalDraft {
        name: AnimalName::new(name).map_err(|err| animal_field_error(&err))?,
        weight: Weight::new(weight).map_err(|err| animal_field_error(&err))?,
        diet: Diet::new(diet).map_err(|err| animal_field_error(&err))?,
    })
}

fn parse_new_animal(mut body: AnimalRequestBody) -> Result<NewAnimal, Error> {
    let id = body
        .id
        .take()
        .map(|raw| parse_animal_id(&raw, FieldName::ID))
        .transpose()?;
    let draft = parse_draft(body)?;
    Ok(NewAnimal { id, draft })
}

fn parse_path_id(raw: &str) -> Result<AnimalId, Error> {
    parse_animal_id(raw, FieldName::ID)
}

/// Store a new animal.
///
/// Responds with `201 Created`, the stored record, and a `Location` header.
#[utoipa::path(
    post,
    path = "/api/v1/animals",
    request_body = AnimalRequestBody,
    responses(
        (status = 201, description = "Animal created", body = AnimalResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Animal id already exists", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["animals"],
    operation_id = "createAnimal"
)]
#[post("/animals")]
pub async fn create_animal(
    state: web::Data<HttpState>,
    payload: web::Json<AnimalRequestBody>,
) -> ApiResult<HttpResponse> {
    let new_animal = parse_new_animal(payload.into_inner())?;
    let created = state.animals.create(new_animal).await?;
    let location = format!("/api/v1/animals/{}", created.id());

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(AnimalResponseBody::from(created)))
}

/// List every animal ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/animals",
    responses(
        (status = 200, description = "Stored animals", body = [AnimalResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["animals"],
    operation_id = "listAnimals"
)]
#[get("/animals")]
pub async fn list_animals(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AnimalResponseBody>>> {
    let animals = state.animals_query.list().await?;
    Ok(web::Json(
        animals.into_iter().map(AnimalResponseBody::from).collect(),
    ))
}

/// Fetch a single animal.
#[utoipa::path(
    get,
    path = "/api/v1/animals/{id}",
    params(("id" = uuid::Uuid, Path, description = "Animal identifier")),
    responses(
        (status = 200, description = "Animal", body = AnimalResponseBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Animal not found", body = ErrorSchema)
    ),
    tags = ["animals"],
    operation_id = "getAnimal"
)]
#[get("/animals/{id}")]
pub async fn get_animal(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AnimalResponseBody>> {
    let id = parse_path_id(&path)?;
    let animal = state.animals_query.get(id).await?;
    Ok(web::Json(AnimalResponseBody::from(animal)))
}

/// Replace name, weight, and diet of an animal.
///
/// An `id` in the body is optional but must match the path when present.
#[utoipa::path(
    put,
    path = "/api/v1/animals/{id}",
    params(("id" = uuid::Uuid, Path, description = "Animal identifier")),
    request_body = AnimalRequestBody,
    responses(
        (status = 200, description = "Animal updated", body = AnimalResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Animal not found", body = ErrorSchema)
    ),
    tags = ["animals"],
    operation_id = "updateAnimal"
)]
#[put("/animals/{id}")]
pub async fn update_animal(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AnimalRequestBody>,
) -> ApiResult<web::Json<AnimalResponseBody>> {
    let id = parse_path_id(&path)?;
    let mut body = payload.into_inner();
    if let Some(raw) = body.id.take() {
        let body_id = parse_animal_id(&raw, FieldName::ID)?;
        if body_id != id {
            return Err(id_mismatch_error(&raw));
        }
    }
    let draft = parse_draft(body)?;
    let updated = state.animals.update(id, draft).await?;
    Ok(web::Json(AnimalResponseBody::from(updated)))
}

/// Remove an animal.
#[utoipa::path(
    delete,
    path = "/api/v1/animals/{id}",
    params(("id" = uuid::Uuid, Path, description = "Animal identifier")),
    responses(
        (status = 204, description = "Animal deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Animal not found", body = ErrorSchema)
    ),
    tags = ["animals"],
    operation_id = "deleteAnimal"
)]
#[delete("/animals/{id}")]
pub async fn delete_animal(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path)?;
    state.animals.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "animals_tests.rs"]
mod tests;
