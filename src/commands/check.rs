use crate::gallery;
use crate::utils;
use crate::width::WidthGauge;
use crate::TdfkitContext;
use anyhow::Result;
use colored::*;

/// Widest art a preview may render before it breaks an 80-column terminal.
pub const WIDTH_LIMIT: usize = 80;

struct WideEntry {
    filename: String,
    title: String,
    max_width: usize,
}

pub fn run(dir_arg: Option<String>, ctx: &TdfkitContext) -> Result<()> {
    let dir = utils::resolve_gallery_dir(dir_arg)?;
    let files = gallery::list_art_files(&dir)?;

    if !ctx.quiet {
        println!(
            "{} Checking rendered lengths of ASCII art in {}...",
            "[INFO]".blue(),
            dir.display()
        );
        println!("{}", "=".repeat(80));
    }

    let gauge = WidthGauge::new();
    let pb = utils::create_spinner("Measuring previews...", ctx.quiet);

    let mut flagged: Vec<WideEntry> = Vec::new();
    let mut widest = 0usize;

    for path in &files {
        let filename = gallery::display_name(path);

        let art = match gallery::read_art_file(path) {
            Ok(art) => art,
            Err(e) => {
                pb.suspend(|| {
                    println!("{} Error processing {}: {}", "[WARN]".yellow(), filename, e);
                });
                continue;
            }
        };

        let max_width = art.max_visible_width(&gauge);
        widest = widest.max(max_width);

        if ctx.verbose {
            pb.suspend(|| println!("   {}: {} cols", filename, max_width));
        }

        // The report wants a title; the overall maximum does not.
        let Some(title) = art.title() else { continue };

        if max_width > WIDTH_LIMIT {
            flagged.push(WideEntry {
                filename,
                title: title.to_string(),
                max_width,
            });
        }
    }

    pb.finish_and_clear();

    // Stable sort, so ties keep their scan order.
    flagged.sort_by(|a, b| b.max_width.cmp(&a.max_width));

    println!(
        "Found {} titles with rendered length > {} characters:",
        flagged.len(),
        WIDTH_LIMIT
    );
    println!();

    for entry in &flagged {
        println!("Title: {}", entry.title);
        println!("File: {}", entry.filename);
        println!("Max rendered length: {} characters", entry.max_width);
        println!("{}", "-".repeat(40));
    }

    println!();
    println!("Overall max rendered length found: {} characters", widest);
    println!("Total files checked: {}", files.len());
    println!("Files with length > {}: {}", WIDTH_LIMIT, flagged.len());

    Ok(())
}
