use std::{borrow::Cow, collections::HashMap, fmt};

/// Abstract data type classifier, the key side of a dialect's type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Int,
    BigInt,
    Real,
    Double,
    Decimal,
    Char,
    Varchar,
    Text,
    Blob,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Uuid,
}

impl SqlType {
    /// Every classifier the system knows, in declaration order.
    pub const ALL: [SqlType; 16] = [
        SqlType::Boolean,
        SqlType::SmallInt,
        SqlType::Int,
        SqlType::BigInt,
        SqlType::Real,
        SqlType::Double,
        SqlType::Decimal,
        SqlType::Char,
        SqlType::Varchar,
        SqlType::Text,
        SqlType::Blob,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::TimestampTz,
        SqlType::Uuid,
    ];
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SqlType::Boolean => "boolean",
            SqlType::SmallInt => "smallint",
            SqlType::Int => "integer",
            SqlType::BigInt => "bigint",
            SqlType::Real => "real",
            SqlType::Double => "double",
            SqlType::Decimal => "decimal",
            SqlType::Char => "char",
            SqlType::Varchar => "varchar",
            SqlType::Text => "text",
            SqlType::Blob => "blob",
            SqlType::Date => "date",
            SqlType::Time => "time",
            SqlType::Timestamp => "timestamp",
            SqlType::TimestampTz => "timestamp with time zone",
            SqlType::Uuid => "uuid",
        })
    }
}

/// Immutable mapping from classifier to a backend type-name template.
///
/// Templates may embed `$l`, `$p` and `$s` placeholders for length, precision
/// and scale. Scale falls back to 0 when precision is given without it. A
/// trailing parenthesized group whose placeholders stay unfilled is dropped,
/// so `varchar($l)` resolves to `varchar` when no length is passed.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    names: HashMap<SqlType, Cow<'static, str>>,
}

impl TypeNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `ty` to `template`, replacing any previous entry.
    pub fn with(mut self, ty: SqlType, template: impl Into<Cow<'static, str>>) -> Self {
        self.names.insert(ty, template.into());
        self
    }

    pub fn contains(&self, ty: SqlType) -> bool {
        self.names.contains_key(&ty)
    }

    /// Resolves the name for `ty`, substituting the size arguments into the
    /// template. `None` when the classifier has no entry.
    pub fn resolve(
        &self,
        ty: SqlType,
        length: Option<u32>,
        precision: Option<u8>,
        scale: Option<u8>,
    ) -> Option<String> {
        Some(expand(self.names.get(&ty)?, length, precision, scale))
    }
}

fn expand(template: &str, length: Option<u32>, precision: Option<u8>, scale: Option<u8>) -> String {
    if !template.contains('$') {
        return template.to_string();
    }
    let mut out = template.to_string();
    if let Some(length) = length {
        out = out.replace("$l", &length.to_string());
    }
    if let Some(precision) = precision {
        out = out.replace("$p", &precision.to_string());
        out = out.replace("$s", &scale.unwrap_or(0).to_string());
    }
    if let Some(position) = out.find('$') {
        // a placeholder stayed unfilled: drop its parenthesized group
        let start = out[..position].rfind('(').unwrap_or(position);
        out.truncate(start);
        while out.ends_with(' ') {
            out.pop();
        }
    }
    out
}
