use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use demarc_core::domain::find_project_root;
use demarc_core::{Config, DomainIndex, LintReport, Linter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "demarc")]
#[command(about = "Enforce data-ownership boundaries between domain modules", long_about = None)]
struct Cli {
    /// Config file (defaults to ./demarc.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files or directories for boundary violations
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print which domain owns each model
    Domains {
        /// Schema directory (defaults to the configured one under the project root)
        #[arg(long)]
        schema_dir: Option<PathBuf>,
    },
    /// Write a default demarc.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { paths, format } => {
            let config = load_config(cli.config.as_deref())?;
            let mut linter = Linter::new(config).with_index_cache();

            let mut clean = true;
            for path in &paths {
                let report = linter
                    .lint_path(path)
                    .wrap_err_with(|| format!("Failed to check {}", path.display()))?;
                clean &= report.is_clean();
                print_report(&report, format)?;
            }

            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Domains { schema_dir } => {
            let config = load_config(cli.config.as_deref())?;
            let schema_dir = match schema_dir {
                Some(dir) => dir,
                None => {
                    let cwd = std::env::current_dir()?;
                    let root = find_project_root(&cwd)?;
                    config.boundaries.schema_path(&root)
                }
            };

            let index = DomainIndex::build(&schema_dir);
            if index.is_empty() {
                println!("No models found under {}", schema_dir.display());
            }
            for (model, domain) in index.iter() {
                println!("{:<32} {}", model, domain);
            }
        }
        Commands::Init { force } => {
            let path = Path::new(demarc_core::config::PROJECT_CONFIG_FILE);
            if path.exists() && !force {
                return Err(eyre!(
                    "{} already exists; use --force to overwrite",
                    path.display()
                ));
            }
            std::fs::write(path, Config::default_config_string())?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DEMARC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&Path>) -> color_eyre::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

fn print_report(report: &LintReport, format: Format) -> color_eyre::Result<()> {
    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        Format::Text => {
            for finding in &report.findings {
                println!("{}", finding);
            }
            let summary: Vec<String> = report
                .counts()
                .iter()
                .map(|(kind, count)| format!("{} {}", count, kind))
                .collect();
            if summary.is_empty() {
                println!("{} files checked, no boundary violations", report.files_checked);
            } else {
                println!(
                    "{} files checked, {} findings ({})",
                    report.files_checked,
                    report.findings.len(),
                    summary.join(", ")
                );
            }
        }
    }
    Ok(())
}
