use crate::{DialectError, Result, SqlType, TypeNames, Value, join_into};
use log::warn;
use std::fmt::{Debug, Write};

/// A SQL dialect: every backend-specific rendering decision behind one
/// shareable object, so query and schema builders never special-case
/// backends themselves.
///
/// The default method bodies are the base rules, conservative SQL-92-ish
/// output; a backend profile overrides only the operations where its syntax
/// diverges, which keeps the contract fully implemented by construction.
/// Implementations are stateless after construction and safe to share
/// across any number of threads.
pub trait Dialect: Debug + Send + Sync {
    /// Short lowercase name used in error messages and logs.
    fn name(&self) -> &str;

    fn type_names(&self) -> &TypeNames;

    fn create_table_keyword(&self) -> &str {
        "create table"
    }

    fn primary_key_keyword(&self) -> &str {
        "primary key"
    }

    // Empty when the backend treats a bare column as nullable already.
    fn null_column_marker(&self) -> &str {
        ""
    }

    fn null_keyword(&self) -> &str {
        "null"
    }

    fn supports_unique_constraints(&self) -> bool {
        true
    }

    fn supports_identity_columns(&self) -> bool {
        false
    }

    /// Whether an identity column still carries an explicit type name, or
    /// the identity clause replaces the type entirely.
    fn identity_requires_explicit_type(&self) -> bool {
        true
    }

    fn supports_if_exists_before_table_name(&self) -> bool {
        true
    }

    fn supports_if_exists_after_table_name(&self) -> bool {
        false
    }

    fn supports_add_keyword_before_constraint(&self) -> bool {
        true
    }

    fn identity_column_clause(&self) -> &str {
        ""
    }

    fn identity_retrieval_statement(&self) -> &str {
        ""
    }

    fn cascade_constraints(&self) -> &str {
        ""
    }

    fn quote_char(&self) -> char {
        '"'
    }

    fn write_escaped(&self, out: &mut String, value: &str, quote: char) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == quote {
                out.push_str(&value[position..i]);
                out.push(quote);
                out.push(quote);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier(&self, out: &mut String, name: &str) {
        let quote = self.quote_char();
        out.push(quote);
        self.write_escaped(out, name, quote);
        out.push(quote);
    }

    /// Appends `value` as an embeddable SQL literal. A category the dialect
    /// has no literal syntax for degrades to the null keyword with a warning.
    fn write_literal(&self, out: &mut String, value: &Value) {
        match value {
            Value::Null => out.push_str(self.null_keyword()),
            Value::Bool(v) => out.push_str(["0", "1"][*v as usize]),
            Value::Int(v) => {
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(*v));
            }
            Value::Float(v) if v.is_finite() => {
                let mut buffer = ryu::Buffer::new();
                out.push_str(buffer.format(*v));
            }
            Value::Float(..) => self.write_unformattable(out, "non-finite float"),
            Value::Decimal(v) => {
                let _ = write!(out, "{}", v);
            }
            Value::Str(v) => self.write_string_literal(out, v),
            Value::Blob(v) => self.write_blob_literal(out, v),
            Value::Date(v) => {
                out.push('\'');
                self.write_date(out, v);
                out.push('\'');
            }
            Value::Time(v) => {
                out.push('\'');
                self.write_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(v) => {
                out.push('\'');
                self.write_date(out, &v.date());
                out.push('T');
                self.write_time(out, &v.time());
                out.push('\'');
            }
            Value::Uuid(v) => {
                let _ = write!(out, "'{}'", v);
            }
        }
    }

    fn write_string_literal(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'');
        out.push('\'');
    }

    // No portable blob syntax; profiles override with their hex form.
    fn write_blob_literal(&self, out: &mut String, value: &[u8]) {
        let _ = value;
        self.write_unformattable(out, "blob");
    }

    // Worded apart from a true null so the gap stays visible in logs.
    fn write_unformattable(&self, out: &mut String, category: &str) {
        warn!(
            "{} dialect has no literal syntax for a {} value, writing {} instead",
            self.name(),
            category,
            self.null_keyword()
        );
        out.push_str(self.null_keyword());
    }

    fn write_date(&self, out: &mut String, value: &time::Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_time(&self, out: &mut String, value: &time::Time) {
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second()
        );
        let mut subsecond = value.nanosecond();
        if subsecond > 0 {
            let mut width = 9;
            while width > 1 && subsecond % 10 == 0 {
                subsecond /= 10;
                width -= 1;
            }
            let _ = write!(out, ".{:0width$}", subsecond);
        }
    }

    /// Applies leading if-exists, cascade fragment and trailing if-exists in
    /// that fixed order. The table name is taken verbatim; callers quote it
    /// first when needed.
    fn write_drop_table(&self, out: &mut String, table: &str) {
        out.push_str("drop table ");
        if self.supports_if_exists_before_table_name() {
            out.push_str("if exists ");
        }
        out.push_str(table);
        let cascade = self.cascade_constraints();
        if !cascade.is_empty() {
            out.push(' ');
            out.push_str(cascade);
        }
        if self.supports_if_exists_after_table_name() {
            out.push_str(" if exists");
        }
    }

    /// When `references_primary_key` is set the referenced column list is
    /// omitted and the constraint binds to the target's primary key;
    /// otherwise the list renders in caller order.
    fn write_add_foreign_key(
        &self,
        out: &mut String,
        name: &str,
        columns: &[&str],
        referenced_table: &str,
        referenced_columns: &[&str],
        references_primary_key: bool,
    ) {
        if self.supports_add_keyword_before_constraint() {
            out.push_str("add ");
        }
        out.push_str("constraint ");
        out.push_str(name);
        out.push_str(" foreign key (");
        join_into(out, columns.iter().copied(), ", ");
        out.push_str(") references ");
        out.push_str(referenced_table);
        if !references_primary_key {
            out.push_str(" (");
            join_into(out, referenced_columns.iter().copied(), ", ");
            out.push(')');
        }
    }

    fn write_drop_foreign_key(&self, out: &mut String, name: &str) {
        out.push_str("drop constraint ");
        out.push_str(name);
    }

    /// `offset == 0` and `limit == 0` mean the respective clause is absent,
    /// never a zero-sized page.
    fn write_pagination(&self, out: &mut String, offset: u64, limit: u64) {
        if limit > 0 {
            let _ = write!(out, " limit {}", limit);
        }
        if offset > 0 {
            let _ = write!(out, " offset {}", offset);
        }
    }

    /// Fails with an unsupported-type error when the mapping table has no
    /// entry for `ty`. Dialects may ignore size arguments their table bakes in.
    fn resolve_type_name(
        &self,
        ty: SqlType,
        length: Option<u32>,
        precision: Option<u8>,
        scale: Option<u8>,
    ) -> Result<String> {
        self.type_names()
            .resolve(ty, length, precision, scale)
            .ok_or_else(|| DialectError::UnsupportedType {
                dialect: self.name().to_string(),
                ty,
            })
    }
}

/// The base rules as a registrable dialect of their own: portable SQL-92-ish
/// output with no backend-specific overrides.
#[derive(Debug)]
pub struct GenericDialect {
    types: TypeNames,
}

impl GenericDialect {
    pub fn new() -> Self {
        // Text and Uuid have no portable spelling and stay unmapped.
        let types = TypeNames::new()
            .with(SqlType::Boolean, "boolean")
            .with(SqlType::SmallInt, "smallint")
            .with(SqlType::Int, "integer")
            .with(SqlType::BigInt, "bigint")
            .with(SqlType::Real, "real")
            .with(SqlType::Double, "double precision")
            .with(SqlType::Decimal, "numeric($p,$s)")
            .with(SqlType::Char, "char($l)")
            .with(SqlType::Varchar, "varchar($l)")
            .with(SqlType::Blob, "blob")
            .with(SqlType::Date, "date")
            .with(SqlType::Time, "time")
            .with(SqlType::Timestamp, "timestamp")
            .with(SqlType::TimestampTz, "timestamp with time zone");
        Self { types }
    }
}

impl Default for GenericDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &str {
        "generic"
    }

    fn type_names(&self) -> &TypeNames {
        &self.types
    }
}
