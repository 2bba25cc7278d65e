use crate::artfile::ArtFile;
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Suffix that marks a rendered preview file.
pub const ART_SUFFIX: &str = ".tdf.txt";

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Gallery directory '{}' does not exist", .0.display())]
    MissingDir(PathBuf),
}

/// All preview files directly inside `dir`, sorted by file name.
///
/// A missing directory is the one fatal condition; unreadable entries are
/// reported and skipped so the scan can continue.
pub fn list_art_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(GalleryError::MissingDir(dir.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                println!("{} Skipping unreadable entry: {}", "[WARN]".yellow(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(ART_SUFFIX) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read one preview fully into memory and split it into header/content.
pub fn read_art_file(path: &Path) -> Result<ArtFile> {
    let raw = fs::read_to_string(path)?;
    Ok(ArtFile::parse(&raw))
}

/// File name for per-file notices; falls back to the full path display.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
