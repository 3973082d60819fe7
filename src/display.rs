use std::fmt::Display;

/// Renders values as `[a, b, c]`.
pub fn format_sequence<T>(values: &[T]) -> String
where
    T: Display,
{
    format_preview(values, values.len())
}

/// Renders at most `limit` values, followed by `, ...` inside the brackets when some were left out.
pub fn format_preview<T>(values: &[T], limit: usize) -> String
where
    T: Display,
{
    let shown: Vec<String> = values.iter().take(limit).map(|v| v.to_string()).collect();
    let mut out = format!("[{}", shown.join(", "));

    if values.len() > limit {
        out.push_str(", ...");
    }

    out.push(']');
    out
}
