mod cli;
mod commands;
mod config;
mod content;
mod markdown;
mod render;
mod report;
mod template;

fn main() {
    let app = cli::Cli::build();
    let outcome = commands::run(app.command);

    if let Err(problem) = outcome {
        eprintln!("{problem:#}");
        std::process::exit(1);
    }
}
