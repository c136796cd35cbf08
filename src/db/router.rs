use std::future::Future;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::connection::{ReadConnection, ReadWriteConnection, Role};
use crate::types::error::AppError;

/// Decides which connection a unit of work runs against. Reads go to the
/// follower when one is configured; writes always go to the primary.
#[derive(Clone)]
pub struct DatabaseRouter {
    primary: DatabaseConnection,
    follower: Option<DatabaseConnection>,
}

impl DatabaseRouter {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        info!("Connecting to primary database...");
        let primary = Database::connect(options(&config.primary_url, config.pool_size)).await?;

        let follower = match &config.follower_url {
            Some(url) => {
                info!("Connecting to follower database...");
                Some(Database::connect(options(url, config.pool_size)).await?)
            }
            None => {
                info!("No follower configured, reads use the primary.");
                None
            }
        };

        info!("Connected to database.");
        Ok(Self::from_connections(primary, follower))
    }

    pub fn from_connections(
        primary: DatabaseConnection,
        follower: Option<DatabaseConnection>,
    ) -> Self {
        Self { primary, follower }
    }

    pub async fn migrate(&self) -> Result<(), DbErr> {
        info!("Running migrations...");
        Migrator::up(&self.primary, None).await?;
        info!("Migrations finished.");
        Ok(())
    }

    pub fn has_follower(&self) -> bool {
        self.follower.is_some()
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.primary.ping().await?;
        Ok(())
    }

    /// Runs `work` bound to the follower if there is one. Writes attempted
    /// through the follower binding fail with [`AppError::ReadOnlyViolation`].
    /// Without a follower the primary is used and writes go through.
    pub async fn run_read_only<F, Fut, T>(&self, work: F) -> Result<T, AppError>
    where
        F: FnOnce(ReadConnection) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let conn = match &self.follower {
            Some(follower) => ReadConnection::new(follower.clone(), Role::Reading),
            None => ReadConnection::new(self.primary.clone(), Role::Writing),
        };

        work(conn).await
    }

    pub async fn run_writable<F, Fut, T>(&self, work: F) -> Result<T, AppError>
    where
        F: FnOnce(ReadWriteConnection) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        work(ReadWriteConnection::new(self.primary.clone())).await
    }
}

fn options(url: &str, pool_size: u32) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(pool_size);
    opts
}
