//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Contact, ContactPatch, NewContact};
use sea_orm::ActiveValue::{NotSet, Set};

impl From<entity::Model> for Contact {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            birthday: entity.birthday,
        }
    }
}

impl From<&NewContact> for entity::ActiveModel {
    fn from(data: &NewContact) -> Self {
        Self {
            id: NotSet,
            first_name: Set(data.first_name.clone()),
            last_name: Set(data.last_name.clone()),
            email: Set(data.email.clone()),
            birthday: Set(data.birthday),
        }
    }
}

/// Copy the present patch fields onto an active model loaded from the store
pub fn apply_patch(active: &mut entity::ActiveModel, patch: &ContactPatch) {
    if let Some(first_name) = &patch.first_name {
        active.first_name = Set(first_name.clone());
    }
    if let Some(last_name) = &patch.last_name {
        active.last_name = Set(last_name.clone());
    }
    if let Some(email) = &patch.email {
        active.email = Set(email.clone());
    }
    if let Some(birthday) = patch.birthday {
        active.birthday = Set(birthday);
    }
}
