use crate::SqlType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialectError>;

/// Failures surfaced by dialect resolution and type-name mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// No dialect is bound to the given connection kind. Recoverable: the
    /// caller may register a profile for that kind and resolve again.
    #[error("no dialect registered for connection kind `{kind}`")]
    UnknownDialect { kind: String },

    /// The dialect's type mapping table has no entry for the classifier: the
    /// schema asks for a type the target backend cannot express.
    #[error("dialect `{dialect}` has no type name for {ty}")]
    UnsupportedType { dialect: String, ty: SqlType },
}
