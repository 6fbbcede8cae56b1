//! Stroke Dashboard CLI
//!
//! Command-line access to the dashboard without a browser:
//! - List the menu
//! - Render a page as text or JSON
//! - Print a calendar year
//! - Show the correlation matrix
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stroke_dashboard::config::Config;
use stroke_dashboard::correlation::{correlation_strength, CorrelationMatrix};
use stroke_dashboard::dataset::Dataset;
use stroke_dashboard::pages::{invoke, Page, RenderContext};
use stroke_dashboard::surface::text::render_text;
use stroke_dashboard::surface::Document;
use stroke_dashboard::Dashboard;

#[derive(Parser)]
#[command(name = "stroke-dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore the healthcare stroke dataset from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset CSV (default: configured path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the menu pages in order
    Pages,

    /// Render a page
    Render {
        /// Menu label, e.g. "Age Distribution"
        label: String,
        /// Append the full-year calendar
        #[arg(long)]
        calendar: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the month grids of a year
    Calendar {
        /// Year (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Correlation matrix of the numeric columns
    Correlations,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load_default();
    // Logs go to stderr; stdout is reserved for command output
    stroke_dashboard::init_logging(&loaded.config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    loaded.log();
    let config = loaded.config;

    let data_path = cli.data.clone().unwrap_or(config.dataset.path);

    match cli.command {
        Commands::Pages => {
            for (i, page) in Page::ALL.iter().enumerate() {
                println!("{:>2}. {}", i + 1, page.label());
            }
        }

        Commands::Render {
            label,
            calendar,
            format,
        } => {
            let Some(page) = Page::resolve(&label) else {
                bail!("Unknown page '{}'. Run `stroke-dashboard-cli pages` for the menu.", label);
            };
            let dataset = load_dataset(&data_path)?;
            let document = Dashboard::new(dataset).render(page, calendar);

            print!("{}", format_document(&document, format)?);
        }

        Commands::Calendar { year } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let Some(january) = NaiveDate::from_ymd_opt(year, 1, 1) else {
                bail!("Year {} is out of range", year);
            };

            let dataset = Dataset::default();
            let mut document = Document::new();
            invoke(
                Page::FullYearCalendar,
                &RenderContext::at(&dataset, january),
                &mut document,
            );
            print!("{}", render_text(&document));
        }

        Commands::Correlations => {
            let dataset = load_dataset(&data_path)?;
            let matrix = CorrelationMatrix::compute(&dataset);
            if matrix.is_empty() {
                println!("No numeric columns.");
                return Ok(());
            }

            let width = matrix.columns.iter().map(|c| c.len()).max().unwrap_or(0).max(6);
            print!("{:width$}", "", width = width);
            for column in &matrix.columns {
                print!(" {:>width$}", column, width = width);
            }
            println!();
            for (name, row) in matrix.columns.iter().zip(&matrix.values) {
                print!("{:width$}", name, width = width);
                for value in row {
                    match value {
                        Some(r) => print!(" {:>width$.3}", r, width = width),
                        None => print!(" {:>width$}", "-", width = width),
                    }
                }
                println!();
            }

            println!();
            for (a, b, r) in matrix.strongest_pairs().into_iter().take(5) {
                println!("{} ~ {}: {:.3} ({})", a, b, r, correlation_strength(r));
            }
        }

        Commands::Config { output } => {
            let config = stroke_dashboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn load_dataset(path: &std::path::Path) -> anyhow::Result<Dataset> {
    stroke_dashboard::dataset::load(path)
        .with_context(|| format!("Failed to load dataset from {:?}", path))
}

fn format_document(document: &Document, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(document),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(document)?),
    })
}
