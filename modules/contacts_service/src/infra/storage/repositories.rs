//! SeaORM repository implementations

use crate::contract::{Contact, ContactPatch, NewContact};
use crate::domain::birthdays::{BirthdayMatch, BirthdayWindow};
use crate::domain::repository::ContactsRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmContactsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmContactsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Filter matching birthdays whose `MM-DD` rendering is one of the window's keys
    fn calendar_condition(&self, window: &BirthdayWindow) -> Condition {
        let month_day = match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => "strftime('%m-%d', birthday)",
            DatabaseBackend::Postgres => "to_char(birthday, 'MM-DD')",
            DatabaseBackend::MySql => "DATE_FORMAT(birthday, '%m-%d')",
        };
        let keys = window.month_day_keys();
        let placeholders = vec!["?"; keys.len()].join(", ");

        Condition::all().add(Expr::cust_with_values(
            format!("{} IN ({})", month_day, placeholders),
            keys,
        ))
    }
}

#[async_trait]
impl ContactsRepository for SeaOrmContactsRepository {
    async fn create(&self, data: &NewContact) -> Result<Contact> {
        let active: entity::ActiveModel = data.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Contact>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Contact>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, id: i32, patch: &ContactPatch) -> Result<Option<Contact>> {
        let Some(existing) = entity::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active: entity::ActiveModel = existing.into();
        mapper::apply_patch(&mut active, patch);
        let result = active.update(&*self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Contact>> {
        let Some(existing) = entity::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(Some(existing.into()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Contact>> {
        let results = entity::Entity::find()
            .filter(
                Condition::any()
                    .add(entity::Column::FirstName.contains(query))
                    .add(entity::Column::LastName.contains(query))
                    .add(entity::Column::Email.contains(query)),
            )
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn upcoming_birthdays(&self, window: &BirthdayWindow) -> Result<Vec<Contact>> {
        let condition = match window.mode {
            BirthdayMatch::ExactDate => {
                Condition::all().add(entity::Column::Birthday.between(window.from, window.to))
            }
            BirthdayMatch::Calendar => self.calendar_condition(window),
        };

        let results = entity::Entity::find()
            .filter(condition)
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}
