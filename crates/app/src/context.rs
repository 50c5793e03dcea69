//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::companies::{CompaniesService, PgCompaniesService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub companies: Arc<dyn CompaniesService>,
}

impl AppContext {
    /// Build application context from database settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(settings)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::with_companies(Arc::new(PgCompaniesService::new(
            Db::new(pool),
        ))))
    }

    #[must_use]
    pub fn with_companies(companies: Arc<dyn CompaniesService>) -> Self {
        Self { companies }
    }
}
