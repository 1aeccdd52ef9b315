use crate::model::with_doc_ext;

/// Turns what a user typed into a cache key: `./` and leading slashes are
/// dropped, backslashes become `/`, and `.json` is appended when missing.
pub fn normalize_key(input: &str) -> String {
    let mut key = input.trim().replace('\\', "/");
    while let Some(rest) = key.strip_prefix("./") {
        key = rest.to_string();
    }
    let key = key.trim_start_matches('/');
    if key.is_empty() {
        return String::new();
    }
    with_doc_ext(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_user_input() {
        assert_eq!(normalize_key("notes"), "notes.json");
        assert_eq!(normalize_key(" notes.json "), "notes.json");
        assert_eq!(normalize_key("./todo/today"), "todo/today.json");
        assert_eq!(normalize_key("todo\\today.json"), "todo/today.json");
        assert_eq!(normalize_key("/a.json"), "a.json");
        assert_eq!(normalize_key("   "), "");
    }
}
