//! Argot keeps SQL portable by routing every backend-specific spelling
//! through a [`Dialect`]: identifier quoting, literal formatting, type
//! names, identity columns, pagination and constraint DDL. Builders own
//! the statement shape, the resolved dialect owns the words.

pub use argot_core::*;
pub use argot_postgres::PostgresDialect;
pub use argot_sqlite::SqliteDialect;

/// Registry preloaded with the stock profiles under their canonical
/// connection kinds.
pub fn builtin_registry() -> DialectRegistry {
    let registry = DialectRegistry::new();
    registry.register(SqliteDialect::KIND, SqliteDialect::new());
    registry.register(PostgresDialect::KIND, PostgresDialect::new());
    registry
}
