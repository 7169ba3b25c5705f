use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use walkdir::WalkDir;

use crate::markdown::MarkdownRenderer;

const WORDS_PER_MINUTE: usize = 200;
const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_SNIPPET_LANGUAGE: &str = "bash";
const DEFAULT_PROJECT_ICON: &str = "📦";

/// A blog post, sorted date-descending in its collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Date,
    pub date_label: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub body_html: String,
    pub reading_time: usize,
}

/// A reusable code snippet; collection keeps source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub language: String,
    pub body_html: String,
}

/// A portfolio project; optional links are omitted entirely when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub icon: String,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub description_html: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    date: Option<String>,
    #[serde(deserialize_with = "deserialize_string_or_list")]
    tags: Vec<String>,
    excerpt: Option<String>,
    category: Option<String>,
    language: Option<String>,
    icon: Option<String>,
    #[serde(deserialize_with = "deserialize_string_or_list")]
    tech: Vec<String>,
    github: Option<String>,
    demo: Option<String>,
}

pub fn discover_posts(dir: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for path in markdown_files(dir)? {
        posts.push(load_post(&path, renderer)?);
    }
    // Stable sort: same-day posts keep their normalized input order.
    posts.sort_by(|left, right| right.date.cmp(&left.date));
    Ok(posts)
}

pub fn discover_snippets(dir: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Snippet>> {
    let mut snippets = Vec::new();
    for path in markdown_files(dir)? {
        snippets.push(load_snippet(&path, renderer)?);
    }
    Ok(snippets)
}

pub fn discover_projects(dir: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    for path in markdown_files(dir)? {
        projects.push(load_project(&path, renderer)?);
    }
    Ok(projects)
}

fn load_post(path: &Path, renderer: &MarkdownRenderer) -> Result<Post> {
    let raw = read_content_file(path)?;
    let (front, body) = parse_front_matter(&raw);
    let slug = file_slug(path)?;
    let date = parse_date(front.date.as_deref(), path)?;

    Ok(Post {
        title: front.title.unwrap_or_else(|| slug.clone()),
        slug,
        date_label: format_date(&date)?,
        date,
        tags: front.tags,
        excerpt: front.excerpt.unwrap_or_default(),
        reading_time: reading_time_minutes(&body),
        body_html: renderer.render(&body),
    })
}

fn load_snippet(path: &Path, renderer: &MarkdownRenderer) -> Result<Snippet> {
    let raw = read_content_file(path)?;
    let (front, body) = parse_front_matter(&raw);
    let slug = file_slug(path)?;

    Ok(Snippet {
        title: front.title.unwrap_or_else(|| slug.clone()),
        slug,
        category: front
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        tags: front.tags,
        language: front
            .language
            .unwrap_or_else(|| DEFAULT_SNIPPET_LANGUAGE.to_string()),
        body_html: renderer.render(&body),
    })
}

fn load_project(path: &Path, renderer: &MarkdownRenderer) -> Result<Project> {
    let raw = read_content_file(path)?;
    let (front, body) = parse_front_matter(&raw);
    let slug = file_slug(path)?;

    Ok(Project {
        title: front.title.unwrap_or_else(|| slug.clone()),
        slug,
        icon: front
            .icon
            .unwrap_or_else(|| DEFAULT_PROJECT_ICON.to_string()),
        tech: front.tech,
        github: non_empty(front.github),
        demo: non_empty(front.demo),
        description_html: renderer.render(&body),
    })
}

fn read_content_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Enumerate the `.md` files under a content directory in a deterministic
/// order. A missing directory is an empty collection, not an error.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// The filename stem is the canonical slug; it stays stable across rebuilds
/// as long as the file is not renamed.
fn file_slug(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .with_context(|| format!("{}: file name is not valid utf-8", path.display()))
}

/// Split a raw content file into its front matter header and body.
///
/// Total by policy: a file without a leading `---` line, an unterminated
/// header, or YAML that does not deserialize all degrade to empty metadata
/// with the whole input as body. Nothing here ever fails the build.
fn parse_front_matter(raw: &str) -> (FrontMatter, String) {
    let mut lines = raw.lines();
    match lines.next() {
        Some(line) if line.trim() == "---" => {}
        _ => return (FrontMatter::default(), raw.to_string()),
    }

    let mut yaml_lines = Vec::new();
    for line in &mut lines {
        if line.trim() == "---" {
            let yaml = yaml_lines.join("\n");
            let front: FrontMatter = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                match serde_yaml::from_str(&yaml) {
                    Ok(front) => front,
                    Err(_) => return (FrontMatter::default(), raw.to_string()),
                }
            };
            let mut body = lines.collect::<Vec<_>>().join("\n");
            if body.starts_with('\n') {
                body.remove(0);
            }
            return (front, body);
        }
        yaml_lines.push(line);
    }

    (FrontMatter::default(), raw.to_string())
}

fn parse_date(value: Option<&str>, origin: &Path) -> Result<Date> {
    let Some(raw) = value else {
        bail!("{}: date is required", origin.display());
    };

    let raw = raw.trim();
    let plain = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, &plain) {
        return Ok(date);
    }
    if let Ok(datetime) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(datetime.date());
    }

    bail!(
        "{}: date '{}' must be YYYY-MM-DD or RFC3339",
        origin.display(),
        raw
    )
}

fn format_date(date: &Date) -> Result<String> {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    date.format(&format).context("failed to format date label")
}

fn reading_time_minutes(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn deserialize_string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Many(Vec<String>),
        One(String),
        None(serde::de::IgnoredAny),
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Many(items) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .collect(),
        Value::One(value) => value
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        Value::None(_) => Vec::new(),
    })
}
