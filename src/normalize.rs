//! Query normalization.

/// Ensure a query string is dot-terminated.
///
/// Appends exactly one `.` iff the input does not already end with one.
/// No trimming and no well-formedness checking: a malformed query is the
/// solver's problem and comes back through its error path. The normalized
/// string is both submitted to the solver and stored verbatim as the
/// [`SolutionSet`](crate::SolutionSet) query text.
pub fn normalize_query(query: &str) -> String {
    if query.ends_with('.') {
        query.to_string()
    } else {
        format!("{}.", query)
    }
}
