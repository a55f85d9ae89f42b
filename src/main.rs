use clap::Parser;
use portfolio_gen::generate::{self, PageKind};
use portfolio_gen::{config, output, sample};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("PORTFOLIO_ON_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("PORTFOLIO_GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "portfolio-gen")]
#[command(about = "Build the publications and projects pages from markdown content")]
#[command(long_about = "\
Build the publications and projects pages from markdown content

Each markdown file under the content root becomes one card. Files start with
a frontmatter header between --- lines, followed by the abstract or
description text.

Content structure:

  content/
  ├── config.toml                  # Site identity (optional, see --gen-config)
  ├── papers/                      # → papers.html, newest first
  │   └── attention-rl-2024.md     # title, authors, venue, year, date, tags,
  │                                # arxiv, pdf, code, bibtex, featured
  └── projects/                    # → projects.html, by order then title
      └── rl-gym-toolkit.md        # title, description, demo, github, tags,
                                   # featured, order

With no flags both pages are built. Run with --init to create sample files.")]
#[command(version = version_string())]
struct Cli {
    /// Build only the publications page
    #[arg(long)]
    papers: bool,

    /// Build only the projects page (ignored with --papers)
    #[arg(long)]
    projects: bool,

    /// Create one sample content file per page type instead of building
    #[arg(long)]
    init: bool,

    /// Print a stock config.toml with all options documented
    #[arg(long)]
    gen_config: bool,

    /// Content directory
    #[arg(long, default_value = "content")]
    source: PathBuf,

    /// Directory the HTML pages are written to
    #[arg(long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    output::print_lines(&output::format_banner());

    if cli.init {
        let report = sample::create_sample_content(&cli.source)?;
        output::print_lines(&output::format_init_report(&report));
        return Ok(());
    }

    let site_config = config::load_config(&cli.source)?;

    for kind in PageKind::selected(cli.papers, cli.projects) {
        output::print_lines(&output::format_build_start(kind));
        let report = generate::build_page(kind, &site_config, &cli.source, &cli.output)?;
        output::print_lines(&output::format_page_report(&report));
    }

    output::print_lines(&output::format_build_complete());
    Ok(())
}
