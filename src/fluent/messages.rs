//! Failure-message rendering.
//!
//! Templates use `{field}` placeholders. Every predicate supplies `name`
//! and `actual`; `expected`, `property`, `class` and `regexp` appear where
//! the predicate has them. Substitution is a plain sequential replace, and
//! a rendered message never leaves a recognized placeholder unresolved
//! because the fields are always supplied alongside the template that
//! names them.

/// Substitute `{key}` placeholders in `template` with the given fields.
pub(crate) fn render(template: &str, fields: &[(&str, String)]) -> String {
    let mut message = String::from(template);
    for (key, replacement) in fields {
        let placeholder = format!("{{{}}}", key);
        message = message.replace(&placeholder, replacement);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let rendered = render(
            "{name} should be {expected} but is {actual}",
            &[
                ("name", "actual value".to_string()),
                ("actual", "4".to_string()),
                ("expected", "5".to_string()),
            ],
        );
        assert_eq!(rendered, "actual value should be 5 but is 4");
    }

    #[test]
    fn test_render_ignores_unused_fields() {
        let rendered = render(
            "{name} should throw",
            &[
                ("name", "function".to_string()),
                ("actual", "function".to_string()),
            ],
        );
        assert_eq!(rendered, "function should throw");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders_alone() {
        let rendered = render("{name} and {mystery}", &[("name", "x".to_string())]);
        assert_eq!(rendered, "x and {mystery}");
    }
}
