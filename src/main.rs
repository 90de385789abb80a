#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use fieldwork_ui::ThemeName;

/// Global config directory, set from command line
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Theme the app starts with, resolved in main
static INITIAL_THEME: OnceLock<ThemeName> = OnceLock::new();

/// Get the config directory (set from command line or default)
pub fn config_dir() -> PathBuf {
    CONFIG_DIR
        .get()
        .cloned()
        .unwrap_or_else(config::default_config_dir)
}

/// Get the theme the app starts with
pub fn initial_theme() -> ThemeName {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Fieldwork - themed form components gallery
#[derive(Parser, Debug)]
#[command(name = "fieldwork-gallery")]
#[command(about = "Fieldwork - gallery for the themed form components")]
struct Args {
    /// Start with this theme instead of the saved one (light, dark, black)
    #[arg(short, long)]
    theme: Option<ThemeName>,

    /// Config directory (use different dirs for multiple instances)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let dir = args.config_dir.unwrap_or_else(config::default_config_dir);
    let _ = CONFIG_DIR.set(dir.clone());

    // Saved theme first, CLI flag wins
    let saved = match config::load(&dir) {
        Ok(cfg) => cfg.theme_name(),
        Err(e) => {
            tracing::warn!("Failed to load config: {:#}, using defaults", e);
            ThemeName::default()
        }
    };
    let theme = args.theme.unwrap_or(saved);
    let _ = INITIAL_THEME.set(theme);

    tracing::info!("Starting gallery with theme '{}' and config dir {:?}", theme, dir);

    let window_width = 700.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Fieldwork Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
