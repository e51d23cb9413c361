use argot_core::{ConnectionKind, Dialect, DialectError, DialectRegistry, GenericDialect, TypeNames};
use std::{sync::Arc, thread};

struct FakeConnection {
    kind: &'static str,
}

impl ConnectionKind for FakeConnection {
    fn connection_kind(&self) -> &str {
        self.kind
    }
}

#[test]
fn resolve_unknown_names_the_kind() {
    let registry = DialectRegistry::new();
    let err = registry.resolve_kind("oracle").unwrap_err();
    assert_eq!(err, DialectError::UnknownDialect { kind: "oracle".into() });
    assert_eq!(
        err.to_string(),
        "no dialect registered for connection kind `oracle`"
    );
}

#[test]
fn register_then_resolve_returns_the_instance() {
    let registry = DialectRegistry::new();
    let dialect: Arc<dyn Dialect> = Arc::new(GenericDialect::new());
    registry.register_shared("generic", dialect.clone());
    let resolved = registry.resolve_kind("generic").unwrap();
    assert!(Arc::ptr_eq(&resolved, &dialect));
}

#[test]
fn resolve_via_connection_kind() {
    let registry = DialectRegistry::new();
    registry.register("duck", GenericDialect::new());
    let connection = FakeConnection { kind: "duck" };
    assert_eq!(registry.resolve(&connection).unwrap().name(), "generic");
}

#[test]
fn last_registration_wins() {
    #[derive(Debug)]
    struct Louder(TypeNames);

    impl Dialect for Louder {
        fn name(&self) -> &str {
            "louder"
        }
        fn type_names(&self) -> &TypeNames {
            &self.0
        }
    }

    let registry = DialectRegistry::new();
    registry.register("x", GenericDialect::new());
    registry.register("x", Louder(TypeNames::new()));
    assert_eq!(registry.resolve_kind("x").unwrap().name(), "louder");
}

#[test]
fn resolved_dialects_format_for_diagnostics() {
    let registry = DialectRegistry::new();
    registry.register("generic", GenericDialect::new());
    let resolved = registry.resolve_kind("generic").unwrap();
    assert!(format!("{resolved:?}").starts_with("GenericDialect"));
    assert_eq!(
        format!("{registry:?}"),
        "DialectRegistry { kinds: [\"generic\"] }"
    );
}

#[test]
fn kinds_are_normalized() {
    let registry = DialectRegistry::new();
    registry.register("  SQLite ", GenericDialect::new());
    assert!(registry.contains("sqlite"));
    assert!(registry.resolve_kind("SQLITE").is_ok());
    assert_eq!(registry.kinds(), vec!["sqlite"]);
}

#[test]
fn concurrent_register_and_resolve() {
    let registry = DialectRegistry::new();
    registry.register("base", GenericDialect::new());
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..200 {
                    registry.register(&format!("kind{}", i % 8), GenericDialect::new());
                    assert!(registry.resolve_kind("base").is_ok());
                    let _ = registry.resolve_kind(&format!("kind{}", (i + 1) % 8));
                }
            });
        }
    });
    assert!(registry.contains("base"));
    assert_eq!(registry.kinds().len(), 9);
}
