use argot_core::{Dialect, SqlType, TypeNames};
use std::fmt::Write;

/// Dialect of the embedded single-file backend: lowercase clause style,
/// rowid-backed identity and a type table collapsing onto the storage
/// classes, so declared sizes are accepted but ignored.
#[derive(Debug)]
pub struct SqliteDialect {
    types: TypeNames,
}

impl SqliteDialect {
    pub const KIND: &'static str = "sqlite";

    pub fn new() -> Self {
        let types = TypeNames::new()
            .with(SqlType::Boolean, "integer")
            .with(SqlType::SmallInt, "integer")
            .with(SqlType::Int, "integer")
            .with(SqlType::BigInt, "integer")
            .with(SqlType::Real, "real")
            .with(SqlType::Double, "real")
            .with(SqlType::Decimal, "numeric($p,$s)")
            .with(SqlType::Char, "text")
            .with(SqlType::Varchar, "text")
            .with(SqlType::Text, "text")
            .with(SqlType::Blob, "blob")
            .with(SqlType::Date, "text")
            .with(SqlType::Time, "text")
            .with(SqlType::Timestamp, "text")
            .with(SqlType::TimestampTz, "text")
            .with(SqlType::Uuid, "text");
        Self { types }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        Self::KIND
    }

    fn type_names(&self) -> &TypeNames {
        &self.types
    }

    fn supports_identity_columns(&self) -> bool {
        true
    }

    // The identity clause already carries the integer type.
    fn identity_requires_explicit_type(&self) -> bool {
        false
    }

    fn identity_column_clause(&self) -> &str {
        "integer primary key autoincrement"
    }

    fn identity_retrieval_statement(&self) -> &str {
        "select last_insert_rowid()"
    }

    fn write_blob_literal(&self, out: &mut String, value: &[u8]) {
        out.push_str("x'");
        for b in value {
            let _ = write!(out, "{:02x}", b);
        }
        out.push('\'');
    }

    fn write_pagination(&self, out: &mut String, offset: u64, limit: u64) {
        if limit > 0 {
            let _ = write!(out, " limit {}", limit);
        } else if offset > 0 {
            // the grammar wants a limit clause before offset; -1 disables it
            out.push_str(" limit -1");
        }
        if offset > 0 {
            let _ = write!(out, " offset {}", offset);
        }
    }
}
