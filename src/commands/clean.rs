use crate::gallery;
use crate::utils;
use crate::TdfkitContext;
use std::fs;
use anyhow::Result;
use colored::*;

pub fn run(dir_arg: Option<String>, ctx: &TdfkitContext) -> Result<()> {
    let dir = utils::resolve_gallery_dir(dir_arg)?;
    let files = gallery::list_art_files(&dir)?;

    if !ctx.quiet {
        println!(
            "{} Scanning {} for previews with empty content...",
            "[INFO]".blue(),
            dir.display()
        );
    }

    let mut removed = 0usize;

    for path in &files {
        let filename = gallery::display_name(path);

        let art = match gallery::read_art_file(path) {
            Ok(art) => art,
            Err(e) => {
                println!("{} Error processing {}: {}", "[WARN]".yellow(), filename, e);
                continue;
            }
        };

        if !art.content_is_blank() {
            if ctx.verbose {
                println!("   Keeping {}", filename);
            }
            continue;
        }

        println!("Removing {} (all content lines are empty)", filename);
        if let Err(e) = fs::remove_file(path) {
            println!("{} Error removing {}: {}", "[WARN]".yellow(), filename, e);
            continue;
        }
        removed += 1;
    }

    println!("{} Removed {} files with empty content", "[OK]".green(), removed);

    let remaining = gallery::list_art_files(&dir)?.len();
    println!("Remaining files: {}", remaining);

    Ok(())
}
