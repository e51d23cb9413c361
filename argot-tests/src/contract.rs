use argot_core::{Dialect, SqlType, Value};

/// Renders a single literal through `dialect`.
pub fn literal(dialect: &dyn Dialect, value: &Value) -> String {
    let mut out = String::new();
    dialect.write_literal(&mut out, value);
    out
}

/// Renders a quoted identifier through `dialect`.
pub fn quoted(dialect: &dyn Dialect, name: &str) -> String {
    let mut out = String::new();
    dialect.write_identifier(&mut out, name);
    out
}

/// Appends `dialect`'s pagination clause to `sql`.
pub fn paginated(dialect: &dyn Dialect, sql: &str, offset: u64, limit: u64) -> String {
    let mut out = String::from(sql);
    dialect.write_pagination(&mut out, offset, limit);
    out
}

/// Runs every dialect-independent contract check against `dialect`.
pub fn contract_suite(dialect: &dyn Dialect) {
    quoting(dialect);
    literals(dialect);
    pagination_sentinels(dialect);
    drop_table_shape(dialect);
    foreign_keys(dialect);
    type_table(dialect);
    identity_coherence(dialect);
}

/// Identifier quoting wraps in the dialect quote character and round-trips:
/// stripping the outer quotes and collapsing doubled quote characters
/// recovers the original name.
pub fn quoting(dialect: &dyn Dialect) {
    let quote = dialect.quote_char();
    let doubled: String = [quote, quote].iter().collect();
    for name in ["plain", "with space", "mixed\"quote", "\"", "ab\"\"cd", ""] {
        let quoted = quoted(dialect, name);
        assert_eq!(
            quoted.chars().next(),
            Some(quote),
            "{}: quoted identifier must start with the quote character",
            dialect.name()
        );
        assert_eq!(quoted.chars().last(), Some(quote));
        let inner = &quoted[quote.len_utf8()..quoted.len() - quote.len_utf8()];
        let recovered = inner.replace(&doubled, &quote.to_string());
        assert_eq!(
            recovered,
            name,
            "{}: identifier quoting must round-trip",
            dialect.name()
        );
    }
}

/// Null, boolean, numeric and string literals render the same way in every
/// dialect.
pub fn literals(dialect: &dyn Dialect) {
    assert_eq!(literal(dialect, &Value::Null), dialect.null_keyword());
    assert_eq!(literal(dialect, &Value::Bool(true)), "1");
    assert_eq!(literal(dialect, &Value::Bool(false)), "0");
    assert_eq!(literal(dialect, &Value::Int(-42)), "-42");
    assert_eq!(literal(dialect, &Value::Float(3.14)), "3.14");
    assert_eq!(literal(dialect, &Value::from("it's")), "'it''s'");
    assert_eq!(literal(dialect, &Value::from("no quotes")), "'no quotes'");
}

/// Zero offset and zero limit mean "clause absent", never a zero-sized page.
pub fn pagination_sentinels(dialect: &dyn Dialect) {
    let sql = "select * from t";
    assert_eq!(
        paginated(dialect, sql, 0, 0),
        sql,
        "{}: unset pagination must leave the statement alone",
        dialect.name()
    );
    let paged = paginated(dialect, sql, 5, 10);
    assert!(
        paged.starts_with("select * from t ") && paged.len() > sql.len(),
        "{}: pagination appends a clause, never rewrites: {paged}",
        dialect.name()
    );
}

/// Drop-table output matches the capability flags the dialect advertises,
/// in the fixed order: leading if-exists, name, cascade, trailing if-exists.
pub fn drop_table_shape(dialect: &dyn Dialect) {
    let mut sql = String::new();
    dialect.write_drop_table(&mut sql, "relic");
    let mut expected = String::from("drop table ");
    if dialect.supports_if_exists_before_table_name() {
        expected.push_str("if exists ");
    }
    expected.push_str("relic");
    if !dialect.cascade_constraints().is_empty() {
        expected.push(' ');
        expected.push_str(dialect.cascade_constraints());
    }
    if dialect.supports_if_exists_after_table_name() {
        expected.push_str(" if exists");
    }
    assert_eq!(sql, expected, "{}", dialect.name());
}

/// Primary-key references omit the target column list; explicit targets keep
/// caller order.
pub fn foreign_keys(dialect: &dyn Dialect) {
    let mut to_pk = String::new();
    dialect.write_add_foreign_key(&mut to_pk, "fk1", &["a", "b"], "Target", &[], true);
    assert!(
        to_pk.ends_with("references Target"),
        "{}: {to_pk}",
        dialect.name()
    );
    assert!(to_pk.contains("constraint fk1 foreign key (a, b)"), "{to_pk}");

    let mut explicit = String::new();
    dialect.write_add_foreign_key(&mut explicit, "fk1", &["a", "b"], "Target", &["x", "y"], false);
    assert!(
        explicit.ends_with("references Target (x, y)"),
        "{}: {explicit}",
        dialect.name()
    );

    let mut dropped = String::new();
    dialect.write_drop_foreign_key(&mut dropped, "fk1");
    assert_eq!(dropped, "drop constraint fk1");
}

/// Every classifier in the table resolves deterministically and without
/// leftover placeholders; absent classifiers fail naming the dialect and
/// the classifier.
pub fn type_table(dialect: &dyn Dialect) {
    for ty in SqlType::ALL {
        let resolved = dialect.resolve_type_name(ty, Some(32), Some(10), Some(2));
        if dialect.type_names().contains(ty) {
            let name = resolved.unwrap_or_else(|e| {
                panic!("{}: defined classifier must resolve: {e}", dialect.name())
            });
            assert!(!name.is_empty());
            assert!(!name.contains('$'), "unsubstituted placeholder in {name}");
            let again = dialect.resolve_type_name(ty, Some(32), Some(10), Some(2));
            assert_eq!(again.as_deref(), Ok(name.as_str()));
        } else {
            let message = resolved.unwrap_err().to_string();
            assert!(message.contains(dialect.name()), "{message}");
            assert!(message.contains(&ty.to_string()), "{message}");
        }
    }
}

/// Identity accessors carry real syntax whenever the capability says so.
pub fn identity_coherence(dialect: &dyn Dialect) {
    if dialect.supports_identity_columns() {
        assert!(!dialect.identity_column_clause().is_empty());
        assert!(!dialect.identity_retrieval_statement().is_empty());
    }
}
