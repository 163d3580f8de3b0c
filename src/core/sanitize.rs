/// Strips a quote down to alphanumerics, period, comma and space. Characters
/// outside the set are deleted, not replaced, so neighbouring tokens may
/// merge. Idempotent.
pub fn sanitize_quote(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ',' | ' '))
        .collect()
}
