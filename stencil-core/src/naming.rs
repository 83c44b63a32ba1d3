//! Naming helpers shared by the renderers.

/// Convert a string to snake_case (e.g., "entityTypeManager" -> "entity_type_manager")
///
/// Acronyms stay together: "HTTPClient" -> "http_client".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.trim_end_matches('_').to_string()
}

/// Turn an identifier into lowercase words (e.g., "$entityTypeManager" -> "entity type manager")
pub fn to_words(s: &str) -> String {
    to_snake_case(s.trim_start_matches('$')).replace('_', " ")
}

/// Generate a one-sentence description from a parameter name.
///
/// `$entity_type_manager` becomes "The entity type manager."
pub fn describe(name: &str) -> String {
    let words = to_words(name);
    if words.is_empty() {
        String::new()
    } else {
        format!("The {words}.")
    }
}

/// Whether `s` can be written as a bare key or identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
