//! Template compiler
//!
//! Placeholders have the form `{{name}}`. Names are matched literally, never
//! as patterns, so names containing `.`, `*`, `$` and friends behave like any
//! other text.

use log::debug;

use crate::variables::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Render `{{name}}` for a variable name
pub fn placeholder(name: &str) -> String {
    format!("{OPEN}{name}{CLOSE}")
}

/// Substitute every `{{name}}` in `template` with its value from `variables`
///
/// Single left-to-right pass: substituted values are never rescanned, so a
/// value that itself looks like `{{other}}` lands in the output as-is.
/// Placeholders without a matching variable are left untouched. If two
/// variables' placeholders match at the same position, the one inserted first
/// wins.
pub fn compile(template: &str, variables: &Variables) -> String {
    if variables.is_empty() {
        return template.to_string();
    }

    let patterns: Vec<(String, &str)> = variables.iter().map(|(name, value)| (placeholder(name), value)).collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match patterns.iter().find(|(pattern, _)| tail.starts_with(pattern.as_str())) {
            Some((pattern, value)) => {
                out.push_str(value);
                rest = &tail[pattern.len()..];
            }
            None => {
                // Step past one brace so "{{{x}}}" still finds "{{x}}"
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// An immutable prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn compile(&self, variables: &Variables) -> String {
        debug!(
            "Template::compile: {} bytes, {} variables",
            self.text.len(),
            variables.len()
        );
        compile(&self.text, variables)
    }

    /// Distinct placeholder names in order of first appearance
    ///
    /// A name is whatever sits between `{{` and the next `}}`.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };
            let name = &after_open[..end];
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &after_open[end + CLOSE.len()..];
        }
        names
    }

    /// Placeholder names that `variables` does not cover
    pub fn unresolved(&self, variables: &Variables) -> Vec<&str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !variables.contains(name))
            .collect()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_email_scenario() {
        let template = "You are a {{tone}} email to {{recipient_name}} about {{email_purpose}}.";
        let vars = Variables::from([
            ("tone", "friendly"),
            ("recipient_name", "Sarah Johnson"),
            ("email_purpose", "project timeline"),
        ]);
        assert_eq!(
            compile(template, &vars),
            "You are a friendly email to Sarah Johnson about project timeline."
        );
    }

    #[test]
    fn test_compile_no_placeholders_unchanged() {
        let vars = Variables::from([("tone", "casual")]);
        assert_eq!(compile("Plain text, no braces.", &vars), "Plain text, no braces.");
    }

    #[test]
    fn test_compile_empty_variables_unchanged() {
        assert_eq!(compile("Hi {{name}}", &Variables::new()), "Hi {{name}}");
    }

    #[test]
    fn test_compile_empty_template() {
        let vars = Variables::from([("x", "A")]);
        assert_eq!(compile("", &vars), "");
    }

    #[test]
    fn test_compile_repeated_placeholder() {
        let vars = Variables::from([("x", "A")]);
        assert_eq!(compile("{{x}} and {{x}}", &vars), "A and A");
    }

    #[test]
    fn test_compile_unknown_placeholder_left_verbatim() {
        let vars = Variables::from([("name", "Sarah")]);
        assert_eq!(compile("Hi {{name}}, from {{sender}}", &vars), "Hi Sarah, from {{sender}}");
    }

    #[test]
    fn test_compile_value_not_re_expanded() {
        let vars = Variables::from([("a", "{{b}}"), ("b", "B")]);
        assert_eq!(compile("{{a}} {{b}}", &vars), "{{b}} B");
    }

    #[test]
    fn test_compile_value_not_re_expanded_reverse_order() {
        let vars = Variables::from([("b", "B"), ("a", "{{b}}")]);
        assert_eq!(compile("{{a}} {{b}}", &vars), "{{b}} B");
    }

    #[test]
    fn test_compile_name_with_pattern_characters() {
        let vars = Variables::from([("a.b*", "literal"), ("$1", "dollar")]);
        assert_eq!(compile("{{a.b*}} {{axb}} {{$1}}", &vars), "literal {{axb}} dollar");
    }

    #[test]
    fn test_compile_extra_braces() {
        let vars = Variables::from([("x", "A")]);
        assert_eq!(compile("{{{x}}}", &vars), "{A}");
    }

    #[test]
    fn test_compile_empty_name() {
        let vars = Variables::from([("", "nothing")]);
        assert_eq!(compile("[{{}}]", &vars), "[nothing]");
    }

    #[test]
    fn test_compile_multibyte_text() {
        let vars = Variables::from([("emoji", "😊")]);
        assert_eq!(compile("héllo {{emoji}} wörld {", &vars), "héllo 😊 wörld {");
    }

    #[test]
    fn test_compile_first_inserted_wins_on_overlap() {
        let vars = Variables::from([("a", "short"), ("a}}x", "long")]);
        assert_eq!(compile("{{a}}x}}", &vars), "shortx}}");
    }

    #[test]
    fn test_template_placeholders_in_order() {
        let t = Template::new("```{{programming_language}}\n{{code_snippet}}\n``` {{programming_language}} {{review_focus}}");
        assert_eq!(t.placeholders(), vec!["programming_language", "code_snippet", "review_focus"]);
    }

    #[test]
    fn test_template_placeholders_unterminated() {
        let t = Template::new("{{ok}} then {{broken");
        assert_eq!(t.placeholders(), vec!["ok"]);
    }

    #[test]
    fn test_template_unresolved() {
        let t = Template::new("Hi {{name}} from {{sender}}");
        let vars = Variables::from([("name", "Sarah")]);
        assert_eq!(t.unresolved(&vars), vec!["sender"]);
        assert_eq!(t.compile(&vars), "Hi Sarah from {{sender}}");
    }

    #[test]
    fn test_template_display() {
        let t = Template::from("{{x}}");
        assert_eq!(t.to_string(), "{{x}}");
        assert_eq!(t.as_str(), "{{x}}");
    }

    #[test]
    fn test_placeholder_format() {
        assert_eq!(placeholder("tone"), "{{tone}}");
    }
}
