use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{Post, Project, Snippet};
use crate::template::{TemplateEngine, Templates};

const RELATED_POSTS_LIMIT: usize = 3;

/// One finished output page: a path relative to the output root plus the
/// fully substituted HTML. Built here, written by the orchestrator,
/// discarded after the write.
pub(super) struct Page {
    pub path: PathBuf,
    pub html: String,
}

pub(super) fn home_page(
    engine: &TemplateEngine,
    templates: &Templates,
    posts: &[Post],
    config: &SiteConfig,
) -> Page {
    let values = HashMap::from([("postCards", post_cards(posts, config.homepage_posts))]);
    let content = engine.substitute(&templates.home, &values);

    Page {
        path: PathBuf::from("index.html"),
        html: wrap_in_base(engine, templates, &config.title, "home", ".", content),
    }
}

pub(super) fn post_pages(
    engine: &TemplateEngine,
    templates: &Templates,
    posts: &[Post],
    config: &SiteConfig,
) -> Vec<Page> {
    posts
        .iter()
        .map(|post| {
            let values = HashMap::from([
                ("title", post.title.clone()),
                ("date", post.date_label.clone()),
                ("readingTime", post.reading_time.to_string()),
                ("tags", tag_spans(&post.tags)),
                ("content", post.body_html.clone()),
                ("relatedPosts", related_posts(posts, post)),
            ]);
            let content = engine.substitute(&templates.post, &values);
            let title = format!("{} - {}", post.title, config.title);

            Page {
                path: PathBuf::from("posts").join(format!("{}.html", post.slug)),
                html: wrap_in_base(engine, templates, &title, "posts", "..", content),
            }
        })
        .collect()
}

pub(super) fn snippets_page(
    engine: &TemplateEngine,
    templates: &Templates,
    snippets: &[Snippet],
    config: &SiteConfig,
) -> Page {
    let values = HashMap::from([("snippetCards", snippet_cards(snippets))]);
    let content = engine.substitute(&templates.snippets, &values);
    let title = format!("Snippets - {}", config.title);

    Page {
        path: PathBuf::from("snippets.html"),
        html: wrap_in_base(engine, templates, &title, "snippets", ".", content),
    }
}

pub(super) fn projects_page(
    engine: &TemplateEngine,
    templates: &Templates,
    projects: &[Project],
    config: &SiteConfig,
) -> Page {
    let values = HashMap::from([("projectCards", project_cards(projects))]);
    let content = engine.substitute(&templates.projects, &values);
    let title = format!("Projects - {}", config.title);

    Page {
        path: PathBuf::from("projects.html"),
        html: wrap_in_base(engine, templates, &title, "projects", ".", content),
    }
}

/// Outer composition step: the inner page render becomes the `content`
/// value of the shared shell.
fn wrap_in_base(
    engine: &TemplateEngine,
    templates: &Templates,
    title: &str,
    active_nav: &str,
    base_path: &str,
    content: String,
) -> String {
    let values = HashMap::from([
        ("title", title.to_string()),
        ("activeNav", active_nav.to_string()),
        ("basePath", base_path.to_string()),
        ("content", content),
    ]);
    engine.substitute(&templates.base, &values)
}

fn post_cards(posts: &[Post], limit: usize) -> String {
    posts
        .iter()
        .take(limit)
        .map(post_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn post_card(post: &Post) -> String {
    format!(
        concat!(
            "<article class=\"post-card\" onclick=\"window.location.href='posts/{slug}.html'\">\n",
            "  <div class=\"post-header\">\n",
            "    <h3 class=\"post-title\">{title}</h3>\n",
            "  </div>\n",
            "  <p class=\"post-excerpt\">{excerpt}</p>\n",
            "  <div class=\"post-meta\">\n",
            "    <span class=\"post-date\">\n",
            "      <i data-lucide=\"calendar\" style=\"width: 16px; height: 16px;\"></i>\n",
            "      {date}\n",
            "    </span>\n",
            "  </div>\n",
            "  <div class=\"post-tags\">\n",
            "    {tags}\n",
            "  </div>\n",
            "</article>"
        ),
        slug = post.slug,
        title = post.title,
        excerpt = post.excerpt,
        date = post.date_label,
        tags = tag_spans(&post.tags),
    )
}

/// Up to three other posts in collection order, never the post itself.
fn related_posts(posts: &[Post], current: &Post) -> String {
    posts
        .iter()
        .filter(|other| other.slug != current.slug)
        .take(RELATED_POSTS_LIMIT)
        .map(related_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn related_card(post: &Post) -> String {
    format!(
        concat!(
            "<a href=\"{slug}.html\" class=\"related-card\">\n",
            "  <h3 class=\"related-card-title\">{title}</h3>\n",
            "  <p class=\"related-card-excerpt\">{excerpt}</p>\n",
            "</a>"
        ),
        slug = post.slug,
        title = post.title,
        excerpt = post.excerpt,
    )
}

fn snippet_cards(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .enumerate()
        .map(|(index, snippet)| snippet_card(snippet, index))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snippet_card(snippet: &Snippet, index: usize) -> String {
    format!(
        concat!(
            "<article class=\"snippet-card\" id=\"{slug}\">\n",
            "  <div class=\"snippet-header\">\n",
            "    <div>\n",
            "      <h3 class=\"snippet-title\">{title}</h3>\n",
            "      <p class=\"snippet-description\">{category}</p>\n",
            "    </div>\n",
            "    <button class=\"copy-btn\" onclick=\"copySnippet(this, 'snippet{index}')\">\n",
            "      <i data-lucide=\"copy\" style=\"width: 16px; height: 16px;\"></i>\n",
            "      Copy\n",
            "    </button>\n",
            "  </div>\n",
            "  <div class=\"snippet-code\" id=\"snippet{index}\" data-language=\"{language}\">\n",
            "    {content}\n",
            "  </div>\n",
            "  <div class=\"snippet-footer\">\n",
            "    {tags}\n",
            "  </div>\n",
            "</article>"
        ),
        slug = snippet.slug,
        title = snippet.title,
        category = snippet.category,
        index = index,
        language = snippet.language,
        content = snippet.body_html,
        tags = tag_spans(&snippet.tags),
    )
}

fn project_cards(projects: &[Project]) -> String {
    projects
        .iter()
        .map(project_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_card(project: &Project) -> String {
    format!(
        concat!(
            "<article class=\"project-card\" id=\"{slug}\">\n",
            "  <div class=\"project-image\">{icon}</div>\n",
            "  <div class=\"project-content\">\n",
            "    <div class=\"project-header\">\n",
            "      <h3 class=\"project-title\">{title}</h3>\n",
            "    </div>\n",
            "    {description}\n",
            "    <div class=\"tech-stack\">\n",
            "      {tech}\n",
            "    </div>\n",
            "    <div class=\"project-links\">\n",
            "      {links}\n",
            "    </div>\n",
            "  </div>\n",
            "</article>"
        ),
        slug = project.slug,
        icon = project.icon,
        title = project.title,
        description = project.description_html,
        tech = tech_spans(&project.tech),
        links = project_links(project),
    )
}

/// External links render only for fields that are present; an absent field
/// produces no element at all.
fn project_links(project: &Project) -> String {
    let mut links = Vec::new();
    if let Some(github) = &project.github {
        links.push(format!(
            concat!(
                "<a href=\"{url}\" class=\"project-link\" target=\"_blank\">\n",
                "      <i data-lucide=\"github\" style=\"width: 16px; height: 16px;\"></i>\n",
                "      GitHub\n",
                "    </a>"
            ),
            url = github,
        ));
    }
    if let Some(demo) = &project.demo {
        links.push(format!(
            concat!(
                "<a href=\"{url}\" class=\"project-link demo\">\n",
                "      <i data-lucide=\"external-link\" style=\"width: 16px; height: 16px;\"></i>\n",
                "      Demo\n",
                "    </a>"
            ),
            url = demo,
        ));
    }
    links.join("\n    ")
}

fn tag_spans(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("<span class=\"tag\">{tag}</span>"))
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn tech_spans(tech: &[String]) -> String {
    tech.iter()
        .map(|item| format!("<span class=\"tech-tag\">{item}</span>"))
        .collect::<Vec<_>>()
        .join("\n      ")
}
