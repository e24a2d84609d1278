#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::sync::OnceLock;

use aetherlab_core::route::normalize_path;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Options fixed at startup, set from the command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct LaunchOptions {
    /// Path the router starts on
    pub initial_route: String,
    /// Reduced motion regardless of the OS setting
    pub force_reduced_motion: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            initial_route: "/".to_string(),
            force_reduced_motion: false,
        }
    }
}

/// Get the launch options (set from command line or default)
pub fn launch_options() -> &'static LaunchOptions {
    LAUNCH_OPTIONS.get_or_init(LaunchOptions::default)
}

/// AetherLab - motion-led product studio portfolio
#[derive(Parser, Debug)]
#[command(name = "aetherlab-desktop")]
#[command(about = "AetherLab portfolio site in a desktop window")]
struct Args {
    /// Route to open first (e.g. /work/nebula-horizon)
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Force reduced motion regardless of the system preference
    #[arg(long)]
    reduced_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Log filter directives, overriding RUST_LOG (e.g. "aetherlab_core=debug")
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(directives: Option<&str>) {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let options = LaunchOptions {
        initial_route: normalize_path(&args.route),
        force_reduced_motion: args.reduced_motion,
    };
    tracing::info!(
        route = %options.initial_route,
        reduced_motion = options.force_reduced_motion,
        "Starting AetherLab"
    );
    let _ = LAUNCH_OPTIONS.set(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AetherLab")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
