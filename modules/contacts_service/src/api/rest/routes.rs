//! Route registration with OpenAPI annotations

use super::{
    dto::*,
    error::{map_rejection, ApiError, NotFoundBody, Problem},
    handlers::{self, ListContactsQuery, SearchQuery},
    openapi::ApiDoc,
};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
///
/// Collection paths are served with and without the trailing slash.
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Contacts endpoints
        .route(
            "/contacts",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/{contact_id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
        // Query endpoints
        .route("/search", get(search_contacts_handler))
        .route("/search/", get(search_contacts_handler))
        .route("/birthdays", get(upcoming_birthdays_handler))
        .route("/birthdays/", get(upcoming_birthdays_handler))
        // API description
        .route("/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

#[utoipa::path(
    post,
    path = "/contacts/",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 200, description = "Contact created", body = ContactDto),
        (status = 422, description = "Invalid payload", body = Problem)
    )
)]
pub async fn create_contact_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<Json<ContactDto>, ApiError> {
    handlers::create_contact(service, json.map_err(map_rejection)?).await
}

#[utoipa::path(
    get,
    path = "/contacts/",
    tag = "contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "Contacts page", body = [ContactDto]),
        (status = 422, description = "Invalid query parameters or skip out of range", body = Problem)
    )
)]
pub async fn list_contacts_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListContactsQuery>, QueryRejection>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    handlers::list_contacts(service, query.map_err(map_rejection)?).await
}

#[utoipa::path(
    get,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact found", body = ContactDto),
        (status = 404, description = "Contact not found", body = NotFoundBody)
    )
)]
pub async fn get_contact_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ContactDto>, ApiError> {
    handlers::get_contact(service, path.map_err(map_rejection)?).await
}

#[utoipa::path(
    put,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact identifier")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactDto),
        (status = 404, description = "Contact not found", body = NotFoundBody),
        (status = 422, description = "Invalid payload", body = Problem)
    )
)]
pub async fn update_contact_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    json: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<Json<ContactDto>, ApiError> {
    let path = path.map_err(map_rejection)?;
    handlers::update_contact(service, path, json.map_err(map_rejection)?).await
}

#[utoipa::path(
    delete,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Deleted contact", body = ContactDto),
        (status = 404, description = "Contact not found", body = NotFoundBody)
    )
)]
pub async fn delete_contact_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ContactDto>, ApiError> {
    handlers::delete_contact(service, path.map_err(map_rejection)?).await
}

#[utoipa::path(
    get,
    path = "/search/",
    tag = "contacts",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching contacts", body = [ContactDto]),
        (status = 422, description = "Missing query", body = Problem)
    )
)]
pub async fn search_contacts_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    handlers::search_contacts(service, query.map_err(map_rejection)?).await
}

#[utoipa::path(
    get,
    path = "/birthdays/",
    tag = "contacts",
    responses(
        (status = 200, description = "Contacts with upcoming birthdays", body = [ContactDto])
    )
)]
pub async fn upcoming_birthdays_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    handlers::upcoming_birthdays(service).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
