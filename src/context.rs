use std::collections::BTreeMap;

/// Fold `key=value` tokens into the variable bindings handed to the template.
///
/// Tokens without `=` are dropped silently, values may contain `=` (only the
/// first one splits), and a repeated key keeps its last value.
pub fn build(assignments: &[String]) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    for token in assignments {
        if let Some((key, value)) = token.split_once('=') {
            context.insert(key.to_string(), value.to_string());
        }
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn splits_on_first_equals_only() {
        let context = build(&tokens(&["query=a=b=c"]));
        assert_eq!(context.get("query").map(String::as_str), Some("a=b=c"));
    }

    #[test]
    fn last_duplicate_wins() {
        let context = build(&tokens(&["a=1", "a=2"]));
        assert_eq!(context.get("a").map(String::as_str), Some("2"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn tokens_without_equals_are_dropped() {
        let context = build(&tokens(&["noequals", "name=World"]));
        assert_eq!(context.len(), 1);
        assert_eq!(context.get("name").map(String::as_str), Some("World"));
    }

    #[test]
    fn empty_key_and_empty_value_are_preserved() {
        let context = build(&tokens(&["=value", "key="]));
        assert_eq!(context.get("").map(String::as_str), Some("value"));
        assert_eq!(context.get("key").map(String::as_str), Some(""));
    }

    #[test]
    fn no_assignments_yields_empty_context() {
        assert!(build(&[]).is_empty());
    }
}
