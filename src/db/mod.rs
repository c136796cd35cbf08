pub mod connection;
pub mod router;
pub mod thing;

pub use connection::{ReadConnection, ReadWriteConnection, Role};
pub use router::DatabaseRouter;
