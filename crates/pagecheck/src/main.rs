mod handlers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pagecheck",
    about = "Browser-backed page link validator and smoke checker",
    version,
    long_about = "A browser-backed link validator and smoke checker for web pages.\n\nExamples:\n  pagecheck validate                                 # Validate all page specs in pages/\n  pagecheck check pages/home.yml                     # Check links, images, and visibility\n  pagecheck check --reachability pages/home.yml      # Also probe every resolved URL\n  pagecheck --verbose check pages/home.yml           # Check with more output\n  pagecheck probe https://example.com/about/         # Probe explicit URLs"
)]
struct Pagecheck {
    #[command(subcommand)]
    command: Commands,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive execution details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the checks a page spec declares against the live page
    Check {
        /// Path to the page spec file
        spec: PathBuf,

        /// Probe every resolved URL and require HTTP 200
        #[arg(short, long)]
        reachability: bool,

        /// Request timeout for reachability probes, in seconds
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,

        /// Run the browser with a visible window
        #[arg(long, default_value_t = false)]
        no_headless: bool,
    },

    /// Validate page spec files without opening a browser
    Validate {
        /// Path to a spec file or directory (defaults to pages)
        path: Option<PathBuf>,
    },

    /// Check that URLs answer with HTTP 200
    Probe {
        /// URLs to probe
        #[arg(required = true)]
        urls: Vec<String>,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,
    },
}

fn main() {
    let cli = Pagecheck::parse();

    // Set log level based on command line flags
    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    match &cli.command {
        Commands::Check {
            spec,
            reachability,
            timeout,
            no_headless,
        } => match handlers::check_page(spec, *reachability, *timeout, !*no_headless) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                logging::error(&format!("Check failed: {}", e));
                std::process::exit(1);
            }
        },

        Commands::Validate { path } => {
            let validate_path = path.clone().unwrap_or_else(|| PathBuf::from("pages"));

            match handlers::validate_specs(&validate_path) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Probe { urls, timeout } => match handlers::probe_urls(urls, *timeout) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                logging::error(&format!("Probe failed: {}", e));
                std::process::exit(1);
            }
        },
    }
}
