use argot_core::{Dialect, SqlType, Value};
use argot_postgres::PostgresDialect;
use argot_tests::{contract_suite, init_logs, literal, paginated};

#[test]
fn contract() {
    init_logs();
    contract_suite(&PostgresDialect::new());
}

#[test]
fn pagination() {
    let dialect = PostgresDialect::new();
    assert_eq!(
        paginated(&dialect, "select * from events", 5, 10),
        "select * from events OFFSET 5 FETCH FIRST 10 ROWS ONLY"
    );
    assert_eq!(
        paginated(&dialect, "select * from events", 0, 3),
        "select * from events FETCH FIRST 3 ROWS ONLY"
    );
    assert_eq!(
        paginated(&dialect, "select * from events", 20, 0),
        "select * from events OFFSET 20"
    );
    assert_eq!(
        paginated(&dialect, "select * from events", 0, 0),
        "select * from events"
    );
}

#[test]
fn identity() {
    let dialect = PostgresDialect::new();
    assert!(dialect.supports_identity_columns());
    assert!(dialect.identity_requires_explicit_type());
    assert_eq!(
        dialect.identity_column_clause(),
        "GENERATED BY DEFAULT AS IDENTITY"
    );
    assert_eq!(dialect.identity_retrieval_statement(), "SELECT lastval()");
}

#[test]
fn native_types() {
    let dialect = PostgresDialect::new();
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::Varchar, Some(255), None, None)
            .unwrap(),
        "VARCHAR(255)"
    );
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::Decimal, None, Some(12), Some(2))
            .unwrap(),
        "NUMERIC(12,2)"
    );
    assert_eq!(
        dialect.resolve_type_name(SqlType::Double, None, None, None).unwrap(),
        "DOUBLE PRECISION"
    );
    assert_eq!(
        dialect.resolve_type_name(SqlType::Blob, None, None, None).unwrap(),
        "BYTEA"
    );
    assert_eq!(
        dialect.resolve_type_name(SqlType::Uuid, None, None, None).unwrap(),
        "UUID"
    );
    assert_eq!(
        dialect
            .resolve_type_name(SqlType::TimestampTz, None, None, None)
            .unwrap(),
        "TIMESTAMP WITH TIME ZONE"
    );
}

#[test]
fn drop_table_cascades() {
    let dialect = PostgresDialect::new();
    let mut sql = String::new();
    dialect.write_drop_table(&mut sql, "orders");
    assert_eq!(sql, "drop table if exists orders cascade");
}

#[test]
fn blob_literals() {
    let dialect = PostgresDialect::new();
    assert_eq!(
        literal(&dialect, &Value::from(vec![0xDEu8, 0xAD, 0xBE, 0xEF])),
        "'\\xDEADBEEF'"
    );
}
