use argot_core::{Dialect, SqlType, TypeNames};
use std::fmt::Write;

/// Dialect of the client/server backend: standard-form identity and
/// pagination clauses, uppercase native type names, cascading drop-table.
#[derive(Debug)]
pub struct PostgresDialect {
    types: TypeNames,
}

impl PostgresDialect {
    pub const KIND: &'static str = "postgres";

    pub fn new() -> Self {
        let types = TypeNames::new()
            .with(SqlType::Boolean, "BOOLEAN")
            .with(SqlType::SmallInt, "SMALLINT")
            .with(SqlType::Int, "INTEGER")
            .with(SqlType::BigInt, "BIGINT")
            .with(SqlType::Real, "REAL")
            .with(SqlType::Double, "DOUBLE PRECISION")
            .with(SqlType::Decimal, "NUMERIC($p,$s)")
            .with(SqlType::Char, "CHAR($l)")
            .with(SqlType::Varchar, "VARCHAR($l)")
            .with(SqlType::Text, "TEXT")
            .with(SqlType::Blob, "BYTEA")
            .with(SqlType::Date, "DATE")
            .with(SqlType::Time, "TIME")
            .with(SqlType::Timestamp, "TIMESTAMP")
            .with(SqlType::TimestampTz, "TIMESTAMP WITH TIME ZONE")
            .with(SqlType::Uuid, "UUID");
        Self { types }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        Self::KIND
    }

    fn type_names(&self) -> &TypeNames {
        &self.types
    }

    fn supports_identity_columns(&self) -> bool {
        true
    }

    fn identity_column_clause(&self) -> &str {
        "GENERATED BY DEFAULT AS IDENTITY"
    }

    fn identity_retrieval_statement(&self) -> &str {
        "SELECT lastval()"
    }

    fn cascade_constraints(&self) -> &str {
        "cascade"
    }

    fn write_blob_literal(&self, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
    }

    fn write_pagination(&self, out: &mut String, offset: u64, limit: u64) {
        if offset > 0 {
            let _ = write!(out, " OFFSET {}", offset);
        }
        if limit > 0 {
            let _ = write!(out, " FETCH FIRST {} ROWS ONLY", limit);
        }
    }
}
