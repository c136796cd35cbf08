#![allow(dead_code)]

use chrono::Utc;
use entity::thing::{ActiveModel as ThingActive, Entity as Thing};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};
use things::db::DatabaseRouter;

pub mod client;

pub struct TestContext {
    pub db: DatabaseRouter,
    /// The primary, for poking at the schema behind the router's back.
    pub conn: DatabaseConnection,
    /// The follower's own database, when one is configured.
    pub follower: Option<DatabaseConnection>,
}

impl TestContext {
    /// A single database and no follower.
    pub async fn new() -> TestContext {
        let conn = memory_database().await;
        TestContext {
            db: DatabaseRouter::from_connections(conn.clone(), None),
            conn,
            follower: None,
        }
    }

    /// Primary and follower as two separate databases. Nothing replicates
    /// between them, so a row shows up only where it was written.
    pub async fn with_follower() -> TestContext {
        let conn = memory_database().await;
        let follower = memory_database().await;
        TestContext {
            db: DatabaseRouter::from_connections(conn.clone(), Some(follower.clone())),
            conn,
            follower: Some(follower),
        }
    }

    pub fn follower(&self) -> &DatabaseConnection {
        self.follower.as_ref().expect("No follower configured")
    }
}

async fn memory_database() -> DatabaseConnection {
    // every connection to :memory: is a separate database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);

    let conn = Database::connect(opts)
        .await
        .expect("Failed to open sqlite database");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");
    conn
}

/// Writes a row straight into `conn`, bypassing the router.
pub async fn seed_thing(conn: &DatabaseConnection, name: &str) {
    let now = Utc::now();
    Thing::insert(ThingActive {
        name: Set(Some(name.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    })
    .exec(conn)
    .await
    .expect("Failed to seed thing");
}

/// Names of every row in `conn`, bypassing the router.
pub async fn names_in(conn: &DatabaseConnection) -> Vec<Option<String>> {
    Thing::find()
        .all(conn)
        .await
        .expect("Failed to read things")
        .into_iter()
        .map(|t| t.name)
        .collect()
}

// Test data helpers
pub mod test_data {
    use things::types::thing::ThingParams;

    pub fn named(name: &str) -> ThingParams {
        ThingParams { name: Some(name.to_string()) }
    }
}
