/// Compile catalog filters into SQL predicates over JSON documents
use sqlx::{QueryBuilder, Sqlite};
use vibe_core::query::{Field, Filter};

/// Append `filter` as a boolean SQL expression.
///
/// Field paths come from the closed [`Field`] enum; search terms are always
/// bound. Matching goes through the `REGEXP` function registered on every
/// pooled connection, with Unicode case folding.
pub(crate) fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &Filter) {
    match filter {
        Filter::All => {
            builder.push("1 = 1");
        }
        Filter::Contains { field, term } => {
            push_field(builder, *field);
            builder.push(" REGEXP ");
            builder.push_bind(contains_pattern(term));
        }
        Filter::EqualsIgnoreCase { field, term } => {
            push_field(builder, *field);
            builder.push(" REGEXP ");
            builder.push_bind(equals_pattern(term));
        }
        Filter::AnyOf(filters) => push_group(builder, filters, " OR ", "0 = 1"),
        Filter::AllOf(filters) => push_group(builder, filters, " AND ", "1 = 1"),
    }
}

/// Case-insensitive pattern matching `term` anywhere in the value
pub(crate) fn contains_pattern(term: &str) -> String {
    format!("(?i){}", regex::escape(term))
}

/// Case-insensitive pattern matching the whole value against `term`
pub(crate) fn equals_pattern(term: &str) -> String {
    format!("(?i)^{}$", regex::escape(term))
}

fn push_field(builder: &mut QueryBuilder<'_, Sqlite>, field: Field) {
    builder.push("json_extract(document, '$.");
    builder.push(field.as_str());
    builder.push("')");
}

fn push_group(
    builder: &mut QueryBuilder<'_, Sqlite>,
    filters: &[Filter],
    separator: &str,
    empty: &str,
) {
    if filters.is_empty() {
        builder.push(empty);
        return;
    }

    builder.push("(");
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            builder.push(separator);
        }
        push_filter(builder, filter);
    }
    builder.push(")");
}

/// SQLite treats a negative LIMIT as unbounded
pub(crate) fn sql_limit(limit: usize) -> i64 {
    if limit == 0 {
        -1
    } else {
        i64::try_from(limit).unwrap_or(i64::MAX)
    }
}
