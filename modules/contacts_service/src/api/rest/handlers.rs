//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError},
    mapper::to_dtos,
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

/// Query parameters for listing contacts
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// Number of contacts to skip (at most 9223372036854775807)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of contacts to return (defaults to 100)
    pub limit: Option<u64>,
}

/// Query parameters for contact search
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against first name, last name and email
    pub query: String,
}

/// Create a contact
pub async fn create_contact(
    service: Arc<Service>,
    Json(req): Json<CreateContactRequest>,
) -> Result<Json<ContactDto>, ApiError> {
    let contact = service
        .create_contact(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(contact.into()))
}

/// List contacts with offset/limit
pub async fn list_contacts(
    service: Arc<Service>,
    Query(query): Query<ListContactsQuery>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    let contacts = service
        .list_contacts(query.skip, query.limit)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_dtos(contacts)))
}

/// Get a specific contact
pub async fn get_contact(
    service: Arc<Service>,
    Path(contact_id): Path<i32>,
) -> Result<Json<ContactDto>, ApiError> {
    let contact = service
        .get_contact(contact_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(contact.into()))
}

/// Update a contact
pub async fn update_contact(
    service: Arc<Service>,
    Path(contact_id): Path<i32>,
    Json(req): Json<UpdateContactRequest>,
) -> Result<Json<ContactDto>, ApiError> {
    let contact = service
        .update_contact(contact_id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(contact.into()))
}

/// Delete a contact, responding with its final representation
pub async fn delete_contact(
    service: Arc<Service>,
    Path(contact_id): Path<i32>,
) -> Result<Json<ContactDto>, ApiError> {
    let contact = service
        .delete_contact(contact_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(contact.into()))
}

/// Search contacts by name or email substring
pub async fn search_contacts(
    service: Arc<Service>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    let contacts = service
        .search_contacts(&query.query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_dtos(contacts)))
}

/// Contacts with a birthday in the upcoming window
pub async fn upcoming_birthdays(
    service: Arc<Service>,
) -> Result<Json<Vec<ContactDto>>, ApiError> {
    let contacts = service
        .upcoming_birthdays()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_dtos(contacts)))
}
