use crate::{Dialect, DialectError, Result};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// Tags a connection handle with the backend kind it talks to. The kind is
/// decided where the connection is constructed, never inferred from runtime
/// types.
pub trait ConnectionKind {
    /// Identifier the registry keys dialects under, e.g. `"sqlite"`.
    fn connection_kind(&self) -> &str;
}

/// Maps connection kinds to shared dialect instances.
///
/// Registration is rare (startup or test setup) while resolution can happen
/// concurrently on request paths, so the entries sit behind a read/write
/// lock. The last registration for a kind wins. Kinds are matched after
/// trimming and ASCII-lowercasing.
pub struct DialectRegistry {
    entries: RwLock<HashMap<String, Arc<dyn Dialect>>>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Binds `dialect` to `kind`, replacing any previous binding.
    pub fn register(&self, kind: &str, dialect: impl Dialect + 'static) {
        self.register_shared(kind, Arc::new(dialect));
    }

    /// Binds an already-shared dialect instance to `kind`.
    pub fn register_shared(&self, kind: &str, dialect: Arc<dyn Dialect>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(normalize(kind), dialect);
    }

    /// Looks up the dialect bound to the connection's kind.
    pub fn resolve(&self, connection: &impl ConnectionKind) -> Result<Arc<dyn Dialect>> {
        self.resolve_kind(connection.connection_kind())
    }

    /// Looks up the dialect bound to a raw connection kind.
    pub fn resolve_kind(&self, kind: &str) -> Result<Arc<dyn Dialect>> {
        let kind = normalize(kind);
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&kind)
            .cloned()
            .ok_or(DialectError::UnknownDialect { kind })
    }

    pub fn contains(&self, kind: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(&normalize(kind))
    }

    /// Registered kinds, sorted, for diagnostics.
    pub fn kinds(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut kinds: Vec<_> = entries.keys().cloned().collect();
        kinds.sort();
        kinds
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn normalize(kind: &str) -> String {
    kind.trim().to_ascii_lowercase()
}
