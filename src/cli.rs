use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tinysite", version)]
#[command(
    about = "Build a personal site from markdown content",
    long_about = "tinysite is a minimal static site generator for a personal blog. \n\
It turns markdown files with YAML front matter (posts, snippets, projects) into a \n\
finished tree of HTML pages under dist/. Running it with no subcommand performs a \n\
full rebuild."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn build() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    #[command(
        about = "Render all content and assets into the dist/ output tree",
        long_about = "Perform a full rebuild: reset dist/, copy static assets, load every \n\
content collection, generate all pages, and copy pass-through files. This is also the \n\
default action when no subcommand is given."
    )]
    Build(BuildArgs),
    #[command(
        about = "Remove generated files from dist/",
        long_about = "Delete the previously rendered dist/ directory and recreate it empty \n\
so the next build starts from a clean slate.",
        alias = "clear"
    )]
    Clean(CleanArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct BuildArgs {
    #[arg(
        long,
        help = "Project root directory (defaults to current directory)",
        long_help = "Specify the project root directory holding content/, templates/, and styles/. If not provided, uses the current working directory."
    )]
    pub root: Option<String>,
    #[arg(
        short,
        long,
        help = "Print progress information while building",
        long_help = "Show each lifecycle step (reset, asset copy, content load, page writes) as it happens."
    )]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CleanArgs {
    #[arg(
        long,
        help = "Project root directory (defaults to current directory)",
        long_help = "Specify the project root directory. If not provided, uses the current working directory."
    )]
    pub root: Option<String>,
}
