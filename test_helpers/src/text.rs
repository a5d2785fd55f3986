//! Inspection helpers for generated sources and scenario placeholders.

/// Trims a scenario placeholder and strips one layer of matching `"` or `'`
/// quotes, so `"com.app.Api"` and `com.app.Api` name the same path.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
        .trim()
        .to_owned()
}

/// Bodies of the numbered routines generated for `field`, in source order.
///
/// Each body starts after the routine signature's opening brace and stops
/// before the routine's closing brace.
#[must_use]
pub fn routine_bodies<'a>(source: &'a str, field: &str) -> Vec<&'a str> {
    source
        .split(&format!("fun Module.{field}"))
        .skip(1)
        .filter_map(|part| part.split_once("){"))
        .map(|(_, rest)| rest.split("\n}").next().unwrap_or(rest))
        .collect()
}

/// Dispatcher call lines for `field`, in source order.
#[must_use]
pub fn dispatcher_calls<'a>(source: &'a str, field: &str) -> Vec<&'a str> {
    let prefix = format!("\t\t\t\t{field}");
    source
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .collect()
}

/// Byte offsets of each needle's first occurrence, or `None` if any is absent.
#[must_use]
pub fn positions(source: &str, needles: &[&str]) -> Option<Vec<usize>> {
    needles.iter().map(|needle| source.find(needle)).collect()
}

/// Whether `positions` are strictly increasing.
#[must_use]
pub fn is_ascending(positions: &[usize]) -> bool {
    positions.windows(2).all(|pair| matches!(pair, [a, b] if a < b))
}
