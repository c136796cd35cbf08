pub use sea_orm_migration::prelude::*;

mod m20210214_202514_create_things_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20210214_202514_create_things_table::Migration)]
    }
}
