use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// Optional `tdfkit.toml` manifest naming the gallery to maintain:
///
/// ```toml
/// [gallery]
/// dir = "public/previews"
/// ```
///
/// A relative `dir` is resolved against the manifest's own location, so the
/// tools work from any subdirectory of the project.
#[derive(Deserialize, Debug)]
pub struct TdfkitConfig {
    pub gallery: GallerySection,
    #[serde(skip)]
    root: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct GallerySection {
    pub dir: String,
}

impl TdfkitConfig {
    /// Find and parse a manifest by walking up from the current directory.
    ///
    /// No manifest anywhere is not an error (callers fall back to other
    /// sources); a manifest that exists but cannot be read or parsed is.
    pub fn discover() -> Result<Option<Self>> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;

        let Some(manifest) = Self::find_manifest(&cwd) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&manifest).context("Failed to read tdfkit.toml")?;
        let mut config: TdfkitConfig =
            toml::from_str(&content).context("Failed to parse tdfkit.toml")?;
        config.root = manifest.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(Some(config))
    }

    /// The configured gallery directory, anchored at the manifest location.
    pub fn gallery_dir(&self) -> PathBuf {
        self.root.join(&self.gallery.dir)
    }

    /// Helper to walk up the directory tree
    fn find_manifest(start: &Path) -> Option<PathBuf> {
        let mut current = start;
        loop {
            let manifest = current.join("tdfkit.toml");
            if manifest.exists() {
                return Some(manifest);
            }
            match current.parent() {
                Some(p) => current = p,
                None => return None,
            }
        }
    }
}
