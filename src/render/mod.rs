mod assets;
mod pages;


use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::{discover_posts, discover_projects, discover_snippets};
use crate::markdown::MarkdownRenderer;
use crate::report::Reporter;
use crate::template::{TemplateEngine, Templates};

use pages::Page;

/// Full rebuild: reset the output tree, copy assets, load every content
/// collection, generate all pages, write them, copy pass-through pages.
/// All filesystem writes in the pipeline happen here.
pub fn build_site(config: &SiteConfig, reporter: &dyn Reporter) -> Result<()> {
    let dist = config.output_dir();

    assets::reset_output_dir(&dist)?;
    reporter.event("CLEAN", "Reset dist/");

    let styles = assets::copy_tree(&config.styles_dir(), &dist.join("styles"))?;
    let public = assets::copy_tree(&config.public_dir(), &dist)?;
    reporter.event(
        "STATIC",
        &format!("Copied {} static file(s)", styles + public),
    );

    let renderer = MarkdownRenderer::new();
    let posts = discover_posts(&config.posts_dir(), &renderer)?;
    let snippets = discover_snippets(&config.snippets_dir(), &renderer)?;
    let projects = discover_projects(&config.projects_dir(), &renderer)?;
    reporter.event(
        "CONTENT",
        &format!(
            "Loaded {} post(s), {} snippet(s), {} project(s)",
            posts.len(),
            snippets.len(),
            projects.len()
        ),
    );

    let templates = Templates::load(&config.templates_dir())?;
    let engine = TemplateEngine::new();

    let mut built = Vec::new();
    built.push(pages::home_page(&engine, &templates, &posts, config));
    built.extend(pages::post_pages(&engine, &templates, &posts, config));
    built.push(pages::snippets_page(&engine, &templates, &snippets, config));
    built.push(pages::projects_page(&engine, &templates, &projects, config));

    for page in &built {
        write_page(&dist, page)?;
        reporter.detail("PAGE", &format!("Wrote {}", page.path.display()));
    }

    let passthrough = assets::copy_passthrough_pages(&config.pages_dir(), &dist)?;
    if passthrough > 0 {
        reporter.event(
            "PAGE",
            &format!("Copied {passthrough} pass-through page(s)"),
        );
    }

    reporter.event(
        "DONE",
        &format!("Generated {} page(s) into {}", built.len(), dist.display()),
    );
    Ok(())
}

fn write_page(dist: &Path, page: &Page) -> Result<()> {
    let target = dist.join(&page.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&target, &page.html)
        .with_context(|| format!("failed to write {}", target.display()))
}
