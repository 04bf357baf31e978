#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use devwrap_core::{logging, LogFormat, WrapConfig};
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Global configuration, set from command line
static CONFIG: OnceLock<WrapConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_config() -> WrapConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Software Engineer Wrap - turn a year of coding into a shareable card
#[derive(Parser, Debug)]
#[command(name = "devwrap-desktop")]
#[command(about = "Software Engineer Wrap - your coding stats as a shareable card")]
struct Args {
    /// Directory for fallback downloads when no download folder exists
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Link attached to share captions
    #[arg(long)]
    share_url: Option<String>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let args = Args::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init(args.verbose, format);

    let mut config = WrapConfig {
        data_dir: args.data_dir,
        ..Default::default()
    };
    config.share.page_url = args.share_url;
    tracing::info!(download_dir = %config.download_dir().display(), "Starting desktop app");
    let _ = CONFIG.set(config);

    // Portrait window: the card is 9:16
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Software Engineer Wrap")
            .with_inner_size(LogicalSize::new(620.0, 1000.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
