//! Lexical helpers for Java names and type texts

/// `java.util.Map<K, V>[]` → `Map`, `java.lang.String...` → `String`
pub fn simple_type_name(text: &str) -> &str {
    let base = text.split('<').next().unwrap_or(text);
    let base = base.split('[').next().unwrap_or(base).trim();
    let base = base.trim_end_matches("...").trim_end();
    base.rsplit('.').next().unwrap_or(base).trim()
}

/// Identifier tokens of a type text (`Map<K, List<V>>` → `Map`, `K`, `List`, `V`)
pub fn type_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|t| !t.is_empty())
}

/// `Collections`, `HashMap`: leading upper case followed by some lower case
pub fn is_upper_camel(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_ascii_uppercase())
        && name.chars().any(|c| c.is_ascii_lowercase())
}

/// `MAX_SIZE`, `LOG`
pub fn is_constant_name(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
