/// Appends `values` to `out` with `separator` between consecutive items.
pub fn join_into<'a>(
    out: &mut String,
    values: impl IntoIterator<Item = &'a str>,
    separator: &str,
) {
    let mut first = true;
    for value in values {
        if !first {
            out.push_str(separator);
        }
        out.push_str(value);
        first = false;
    }
}
