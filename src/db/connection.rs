//! Capabilities handed to units of work. Neither type exposes its database
//! handle outside this crate, so work can only touch the database through the
//! store functions in [`crate::db::thing`]. Those that mutate take a
//! [`ReadWriteConnection`], which read-only work can only obtain from
//! [`ReadConnection::writable`], and that refuses on the follower.
//!
//! Writing around the store from inside a read-only block does not compile:
//!
//! ```compile_fail
//! use entity::thing::{ActiveModel, Entity as Thing};
//! use sea_orm::EntityTrait;
//! use things::db::DatabaseRouter;
//! use things::types::error::AppError;
//!
//! async fn sneak_write(router: &DatabaseRouter) -> Result<(), AppError> {
//!     router
//!         .run_read_only(|conn| async move {
//!             Thing::insert(ActiveModel::default())
//!                 .exec(conn.connection())
//!                 .await?;
//!             Ok(())
//!         })
//!         .await
//! }
//! ```

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::types::error::AppError;

/// The database role a connection is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The primary; accepts writes.
    Writing,
    /// The follower replica.
    Reading,
}

pub struct ReadConnection {
    db: DatabaseConnection,
    role: Role,
}

impl ReadConnection {
    pub(crate) fn new(db: DatabaseConnection, role: Role) -> Self {
        Self { db, role }
    }

    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Write access on the same connection. Only granted when this connection
    /// is the primary.
    pub fn writable(&self) -> Result<ReadWriteConnection, AppError> {
        match self.role {
            Role::Writing => Ok(ReadWriteConnection::new(self.db.clone())),
            Role::Reading => {
                warn!("Rejected write inside a read-only unit of work.");
                Err(AppError::ReadOnlyViolation)
            }
        }
    }
}

pub struct ReadWriteConnection {
    db: DatabaseConnection,
}

impl ReadWriteConnection {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Reads on the primary, seeing this connection's own writes.
    pub fn readable(&self) -> ReadConnection {
        ReadConnection::new(self.db.clone(), Role::Writing)
    }
}
