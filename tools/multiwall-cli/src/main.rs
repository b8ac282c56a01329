//! Multiwall CLI — compose one spanned wallpaper from per-monitor images.
//!
//! Usage:
//!   multiwall monitors             List screens and monitors
//!   multiwall compose [OPTIONS]    Compose the wallpaper without applying it
//!   multiwall apply [OPTIONS]      Compose and set it as the desktop background
//!   multiwall fit [OPTIONS]        Fit a single image to a size (preview)
//!   multiwall check                Check system capabilities
//!   multiwall config               Show or initialize the configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use multiwall_common::config::AppConfig;
use multiwall_compose_engine::FitStrategyKind;

mod commands;

#[derive(Parser)]
#[command(
    name = "multiwall",
    about = "Spanned multi-monitor wallpapers with per-monitor fit modes",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the monitor layout comes from.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Read the layout from a file (JSON layout or saved `xrandr` output)
    /// instead of running xrandr
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Screen number to use
    #[arg(long, default_value = "0")]
    screen: u32,
}

/// Options shared by `compose` and `apply`.
#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Image for a monitor, as MONITOR=PATH (repeatable)
    #[arg(short, long = "image", value_parser = commands::parse_key_value)]
    images: Vec<(String, String)>,

    /// Fit override for a monitor, as MONITOR=fill|fit|stretch|tile|center (repeatable)
    #[arg(short, long = "fit", value_parser = commands::parse_key_value)]
    fits: Vec<(String, String)>,

    /// Fit for monitors without an override (defaults to the config value)
    #[arg(long)]
    default_fit: Option<FitStrategyKind>,

    /// Load assignments from a JSON file; --image/--fit entries take precedence
    #[arg(short, long)]
    assignments: Option<PathBuf>,

    /// Save the merged assignments to a JSON file
    #[arg(long)]
    save_assignments: Option<PathBuf>,

    /// Name embedded in the output file (background_<NAME>.jpg)
    #[arg(short, long, default_value = "default")]
    name: String,

    /// Output directory (defaults to the config value)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JPEG quality 1-100 (defaults to the config value)
    #[arg(short, long)]
    quality: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// List screens and monitors
    Monitors {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose the wallpaper without applying it
    Compose(ComposeArgs),

    /// Compose the wallpaper and set it as the spanned desktop background
    Apply {
        #[command(flatten)]
        compose: ComposeArgs,

        /// Settings schema to apply to: background or screensaver
        #[arg(long)]
        target: Option<String>,
    },

    /// Fit a single image to a size and write the result (preview)
    Fit {
        /// Source image
        input: PathBuf,

        /// Output file; the format follows the extension
        #[arg(short, long)]
        output: PathBuf,

        /// Target width
        #[arg(long)]
        width: u32,

        /// Target height
        #[arg(long)]
        height: u32,

        /// Fit strategy
        #[arg(long, default_value = "fill")]
        fit: FitStrategyKind,
    },

    /// Check system capabilities
    Check,

    /// Show the effective configuration, or write it with --init
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(multiwall_common::config::config_file_path);
    let config = AppConfig::load_from(&config_path);

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    multiwall_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Monitors { layout, json } => commands::monitors::run(&layout, json),
        Commands::Compose(args) => commands::compose::run(&config, &args).map(|_| ()),
        Commands::Apply { compose, target } => {
            commands::apply::run(&config, &compose, target.as_deref())
        }
        Commands::Fit {
            input,
            output,
            width,
            height,
            fit,
        } => commands::fit::run(input, output, width, height, fit),
        Commands::Check => commands::check::run(),
        Commands::Config { init } => commands::config::run(&config, &config_path, init),
    }
}
