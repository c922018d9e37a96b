use crate::Value;

/// Reports a query about to be executed by a repository.
pub fn trace_query(operation: &str, sql: &str, args: &[Value]) {
    tracing::debug!(operation, sql, args = ?args, "executing query");
}
