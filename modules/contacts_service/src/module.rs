//! Module declaration and lifecycle implementation
//!
//! Lifecycle order: `migrate` (ensure schema) → `init` (build service) →
//! `register_rest` (mount routes). The host owns the connection pool and
//! closes it after the HTTP server drains.

use crate::config::Config;
use crate::contract::ContactsApi;
use crate::domain::Service;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Contacts service module
pub struct ContactsServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ContactsServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ContactsServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Ensure the contacts table exists
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Contacts service migrations completed");
        Ok(())
    }

    /// Build the repository and domain service over a shared connection pool
    pub fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let cfg = self.config.read().clone();
        if cfg.max_list_limit == 0 {
            anyhow::bail!("contacts_service.max_list_limit must be greater than zero");
        }

        let repo = Arc::new(
            crate::infra::storage::repositories::SeaOrmContactsRepository::new(db),
        );
        let service = Arc::new(Service::new(repo, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Contacts service initialized");
        Ok(())
    }

    /// Initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other components of the host
    pub fn client(&self) -> Result<Arc<dyn ContactsApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering contacts service REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }
}
