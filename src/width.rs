use regex::Regex;
use std::borrow::Cow;

/// Measures how many columns a line of art actually occupies on screen.
///
/// TheDraw previews color their glyphs with ANSI escapes (ESC `[`,
/// digits/semicolons, `m`). Those sequences take no visible space, so they
/// are removed before counting. Anything that does not match that exact
/// shape (truncated or oddly-terminated escapes included) is left in place
/// and counted as visible.
pub struct WidthGauge {
    ansi: Regex,
}

impl WidthGauge {
    pub fn new() -> Self {
        WidthGauge {
            ansi: Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI escape regex"),
        }
    }

    /// Remove every color/style escape sequence from `line`.
    pub fn strip_ansi<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.ansi.replace_all(line, "")
    }

    /// Visible width of `line` in characters, escapes excluded.
    ///
    /// Callers strip line terminators first; this counts whatever remains.
    pub fn visible_width(&self, line: &str) -> usize {
        self.strip_ansi(line).chars().count()
    }
}
