use argot_core::{Dialect, SqlType, Value};
use argot_sqlite::SqliteDialect;
use argot_tests::{contract_suite, init_logs, literal, paginated};

#[test]
fn contract() {
    init_logs();
    contract_suite(&SqliteDialect::new());
}

#[test]
fn pagination() {
    let dialect = SqliteDialect::new();
    assert_eq!(
        paginated(&dialect, "select * from logs", 5, 10),
        "select * from logs limit 10 offset 5"
    );
    assert_eq!(
        paginated(&dialect, "select * from logs", 0, 10),
        "select * from logs limit 10"
    );
    assert_eq!(
        paginated(&dialect, "select * from logs", 7, 0),
        "select * from logs limit -1 offset 7"
    );
    assert_eq!(paginated(&dialect, "select * from logs", 0, 0), "select * from logs");
}

#[test]
fn identity() {
    let dialect = SqliteDialect::new();
    assert!(dialect.supports_identity_columns());
    assert!(!dialect.identity_requires_explicit_type());
    assert_eq!(
        dialect.identity_column_clause(),
        "integer primary key autoincrement"
    );
    assert_eq!(
        dialect.identity_retrieval_statement(),
        "select last_insert_rowid()"
    );
}

#[test]
fn storage_class_types() {
    let dialect = SqliteDialect::new();
    assert_eq!(
        dialect.resolve_type_name(SqlType::Int, None, None, None).unwrap(),
        "integer"
    );
    assert_eq!(
        dialect.resolve_type_name(SqlType::BigInt, None, None, None).unwrap(),
        "integer"
    );
    // declared sizes are accepted but collapse into the storage class
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::Varchar, Some(40), None, None)
            .unwrap(),
        "text"
    );
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::Decimal, None, Some(10), Some(2))
            .unwrap(),
        "numeric(10,2)"
    );
    assert_eq!(
        dialect.resolve_type_name(SqlType::Uuid, None, None, None).unwrap(),
        "text"
    );
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::Timestamp, None, None, None)
            .unwrap(),
        "text"
    );
}

#[test]
fn blob_literals() {
    let dialect = SqliteDialect::new();
    assert_eq!(
        literal(&dialect, &Value::from(vec![0x0Au8, 0x1B, 0xFF])),
        "x'0a1bff'"
    );
    assert_eq!(literal(&dialect, &Value::from(Vec::<u8>::new())), "x''");
}

#[test]
fn drop_table_inherits_base_shape() {
    let dialect = SqliteDialect::new();
    let mut sql = String::new();
    dialect.write_drop_table(&mut sql, "sessions");
    assert_eq!(sql, "drop table if exists sessions");
}
