//! String transformation utilities for scaffolding

/// Upper-case the first character and leave the rest untouched.
///
/// Used both for page titles (`"contact"` -> `"Contact"`) and for the
/// per-page component directory name.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Remove duplicates while keeping the first occurrence of each entry.
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(Into::into)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
