//! OpenAPI document for the contacts REST surface

use super::{
    dto::*,
    error::{NotFoundBody, Problem},
    routes,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "Contact list CRUD, search and upcoming birthdays"),
    paths(
        routes::create_contact_handler,
        routes::list_contacts_handler,
        routes::get_contact_handler,
        routes::update_contact_handler,
        routes::delete_contact_handler,
        routes::search_contacts_handler,
        routes::upcoming_birthdays_handler,
    ),
    components(schemas(
        ContactDto,
        CreateContactRequest,
        UpdateContactRequest,
        Problem,
        NotFoundBody
    )),
    tags((name = "contacts", description = "Contact records"))
)]
pub struct ApiDoc;
