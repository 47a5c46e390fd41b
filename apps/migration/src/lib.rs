pub use sea_orm_migration::prelude::*;

mod m20250701_000001_create_post_table;
mod m20250730_000002_add_post_validation_constraints;
mod m20250730_000003_make_author_required;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250701_000001_create_post_table::Migration),
            Box::new(m20250730_000002_add_post_validation_constraints::Migration),
            Box::new(m20250730_000003_make_author_required::Migration),
        ]
    }
}
