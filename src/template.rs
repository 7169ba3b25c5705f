use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// Placeholder substitution over raw template text.
///
/// The engine recognises `{{ name }}` tokens (whitespace-tolerant inside
/// the braces) and replaces each with the mapped value, or the empty string
/// when no value was supplied: a literal token never survives and an
/// unknown key never errors. Composition is caller-driven: render an inner
/// template first and pass the result as the `content` value of the outer
/// one. No loops, no conditionals, no escaping.
pub struct TemplateEngine {
    placeholder: Regex,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            placeholder: Regex::new(r"\{\{\s*(\w+)\s*\}\}")
                .expect("static placeholder pattern to parse"),
        }
    }

    pub fn substitute(&self, template: &str, values: &HashMap<&str, String>) -> String {
        self.placeholder
            .replace_all(template, |caps: &Captures<'_>| {
                values.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}

/// The five named page templates, loaded once per build. A missing or
/// unreadable file aborts the build.
#[derive(Debug)]
pub struct Templates {
    pub base: String,
    pub home: String,
    pub post: String,
    pub snippets: String,
    pub projects: String,
}

impl Templates {
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            base: load_template(dir, "base")?,
            home: load_template(dir, "home")?,
            post: load_template(dir, "post")?,
            snippets: load_template(dir, "snippets")?,
            projects: load_template(dir, "projects")?,
        })
    }
}

fn load_template(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(format!("{name}.html"));
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read required template {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_placeholder() {
        let engine = TemplateEngine::new();
        let out = engine.substitute("<h1>{{ title }}</h1>", &values(&[("title", "Hi")]));
        assert_eq!(out, "<h1>Hi</h1>");
    }

    #[test]
    fn missing_value_becomes_empty_string() {
        let engine = TemplateEngine::new();
        let out = engine.substitute("<h1>{{ title }}</h1>", &HashMap::new());
        assert_eq!(out, "<h1></h1>");
    }

    #[test]
    fn tolerates_whitespace_inside_the_token() {
        let engine = TemplateEngine::new();
        let map = values(&[("name", "x")]);
        assert_eq!(engine.substitute("{{name}}", &map), "x");
        assert_eq!(engine.substitute("{{  name  }}", &map), "x");
        assert_eq!(engine.substitute("{{ name}}", &map), "x");
    }

    #[test]
    fn replaces_every_occurrence() {
        let engine = TemplateEngine::new();
        let out = engine.substitute("{{ a }}-{{ b }}-{{ a }}", &values(&[("a", "1"), ("b", "2")]));
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn value_text_is_inserted_verbatim() {
        // Replacement strings must not be treated as expansion patterns.
        let engine = TemplateEngine::new();
        let out = engine.substitute(
            "{{ content }}",
            &values(&[("content", "cost: $100 and ${group}")]),
        );
        assert_eq!(out, "cost: $100 and ${group}");
    }

    #[test]
    fn nested_composition_is_caller_driven() {
        let engine = TemplateEngine::new();
        let inner = engine.substitute("<p>{{ body }}</p>", &values(&[("body", "text")]));
        let outer = engine.substitute(
            "<main>{{ content }}</main>",
            &values(&[("content", inner.as_str())]),
        );
        assert_eq!(outer, "<main><p>text</p></main>");
    }

    #[test]
    fn loads_all_five_templates() {
        let dir = TempDir::new().unwrap();
        for name in ["base", "home", "post", "snippets", "projects"] {
            fs::write(dir.path().join(format!("{name}.html")), name).unwrap();
        }
        let templates = Templates::load(dir.path()).unwrap();
        assert_eq!(templates.base, "base");
        assert_eq!(templates.projects, "projects");
    }

    #[test]
    fn missing_template_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.html"), "x").unwrap();
        let error = Templates::load(dir.path()).unwrap_err();
        assert!(format!("{error}").contains("required template"));
    }
}
