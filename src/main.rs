use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use seo_score::config::Config;
use seo_score::content::ContentBundle;
use seo_score::fetch::render_and_score;
use seo_score::render::{CachedRenderer, DocumentRenderer, HttpRenderer};
use seo_score::scoring::{ScoreReport, ScoringMode};
use seo_score::tips::TipCatalog;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_BELOW_MINIMUM: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RenderMode {
    /// Score the inputs as given
    None,
    /// Wrap the content in a document titled "page » site"
    Document,
    /// Fetch the live page at --url
    Http,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a content bundle
    Check {
        /// YAML or JSON file holding the bundle fields; other flags override it
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Body HTML
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the body HTML from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Page URL
        #[arg(long)]
        url: Option<String>,

        /// Meta description
        #[arg(long)]
        meta_description: Option<String>,

        /// Target keyword; switches to subject scoring
        #[arg(long)]
        subject: Option<String>,

        /// Already rendered full page HTML; no rendering happens when given
        #[arg(long)]
        rendered_file: Option<PathBuf>,

        /// How to produce the full page before scoring
        #[arg(long, value_enum, default_value_t = RenderMode::Document)]
        render: RenderMode,

        /// Fetch pages even when a cached copy is fresh
        #[arg(long)]
        no_cache: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit with code 3 when the percentage is lower than this
        #[arg(long)]
        min_percentage: Option<u32>,
    },
    /// List the scored criteria and their tips
    Criteria {
        /// Show the subject set instead of the global set
        #[arg(long)]
        subject: bool,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Remove cached rendered pages
    ClearCache,
}

#[derive(Parser, Debug)]
#[command(name = "seo-score")]
#[command(
    about = "Score web content against SEO best practices or a target keyword",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/seo-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Bundle fields given on the command line.
struct BundleArgs {
    input: Option<PathBuf>,
    title: Option<String>,
    content: Option<String>,
    content_file: Option<PathBuf>,
    url: Option<String>,
    meta_description: Option<String>,
    subject: Option<String>,
    rendered_file: Option<PathBuf>,
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn build_bundle(args: BundleArgs) -> Result<ContentBundle> {
    let mut bundle = match args.input {
        Some(ref path) => ContentBundle::from_file(path)?,
        None => ContentBundle::new(),
    };

    if let Some(title) = args.title {
        bundle.set_title(title);
    }
    if let Some(content) = args.content {
        bundle.set_content(content);
    }
    if let Some(ref path) = args.content_file {
        bundle.set_content(read_file(path)?);
    }
    if let Some(url) = args.url {
        bundle.set_url(url);
    }
    if let Some(description) = args.meta_description {
        bundle.set_meta_description(description);
    }
    if let Some(subject) = args.subject {
        bundle.set_subject(subject);
    }
    if let Some(ref path) = args.rendered_file {
        bundle.set_rendered_content(read_file(path)?);
    }

    Ok(bundle)
}

fn load_and_validate_config(path: Option<String>) -> Config {
    let config = match seo_score::config::load_config(path.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = seo_score::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

fn tip_catalog(config: &Config) -> TipCatalog {
    match config.tip_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn print_report(report: &ScoreReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let use_colors = seo_score::output::should_use_colors();
            println!("{}", seo_score::output::format_report(report, use_colors));
        }
        OutputFormat::Json => match seo_score::output::format_json(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
        OutputFormat::Html => println!("{}", seo_score::output::format_report_html(report)),
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    seo_score::install_crypto_provider();

    let cli = Cli::parse();
    seo_score::logging::init(cli.verbose);
    let start_time = Instant::now();

    match cli.command {
        Commands::Check {
            input,
            title,
            content,
            content_file,
            url,
            meta_description,
            subject,
            rendered_file,
            render,
            no_cache,
            format,
            min_percentage,
        } => {
            let config = load_and_validate_config(cli.config);
            let scoring = config.scoring();
            let render_config = config.render();
            let tips = tip_catalog(&config);

            let bundle = match build_bundle(BundleArgs {
                input,
                title,
                content,
                content_file,
                url,
                meta_description,
                subject,
                rendered_file,
            }) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let report = match render {
                RenderMode::None => {
                    render_and_score::<DocumentRenderer>(bundle, None, &scoring, &tips).await
                }
                RenderMode::Document => {
                    let renderer = DocumentRenderer::new(render_config.site_title());
                    render_and_score(bundle, Some(&renderer), &scoring, &tips).await
                }
                RenderMode::Http => {
                    // Durations were checked by validate_config
                    let timeout = render_config.timeout().unwrap_or_default();
                    let ttl = if no_cache {
                        std::time::Duration::ZERO
                    } else {
                        render_config.cache_ttl().unwrap_or_default()
                    };

                    let http = match HttpRenderer::new(timeout, render_config.user_agent()) {
                        Ok(r) => r,
                        Err(e) => {
                            eprintln!("Failed to create HTTP client: {:#}", e);
                            std::process::exit(EXIT_NETWORK);
                        }
                    };
                    let cache_path = seo_score::render::get_cache_path();
                    let renderer = CachedRenderer::new(http, cache_path, ttl);
                    render_and_score(bundle, Some(&renderer), &scoring, &tips).await
                }
            };

            print_report(&report, format);
            tracing::debug!(elapsed = ?start_time.elapsed(), "check finished");

            if let Some(minimum) = min_percentage {
                if report.percentage < minimum {
                    eprintln!(
                        "Score {}% is below the required {}%",
                        report.percentage, minimum
                    );
                    std::process::exit(EXIT_BELOW_MINIMUM);
                }
            }
        }
        Commands::Criteria { subject } => {
            let config = load_and_validate_config(cli.config);
            let tips = tip_catalog(&config);
            let mode = if subject {
                ScoringMode::Subject
            } else {
                ScoringMode::Global
            };
            let use_colors = seo_score::output::should_use_colors();
            println!("{}", seo_score::output::format_criteria(mode, &tips, use_colors));
        }
        Commands::Init { force } => {
            let path = cli
                .config
                .map(PathBuf::from)
                .unwrap_or_else(seo_score::config::get_config_path);

            if let Err(e) = seo_score::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
        Commands::ClearCache => {
            let cache_path = seo_score::render::get_cache_path();
            if let Err(e) = seo_score::render::clear_cache(&cache_path) {
                eprintln!("Failed to clear cache: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
            println!("Cleared render cache at {}", cache_path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
