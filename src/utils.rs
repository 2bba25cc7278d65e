use std::env;
use std::path::PathBuf;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use crate::config::TdfkitConfig;

pub fn create_spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .tick_chars("|/-\\ ")
        .template("{spinner:.green} {msg}")
        .unwrap());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Centralized logic to pick the gallery directory.
/// Order: CLI argument, TDFKIT_GALLERY, a discovered tdfkit.toml, then
/// the current directory.
pub fn resolve_gallery_dir(arg: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = arg {
        return Ok(PathBuf::from(dir));
    }

    if let Ok(dir) = env::var("TDFKIT_GALLERY") {
        return Ok(PathBuf::from(dir));
    }

    if let Some(config) = TdfkitConfig::discover()? {
        return Ok(config.gallery_dir());
    }

    Ok(PathBuf::from("."))
}
