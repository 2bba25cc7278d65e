use crate::width::WidthGauge;

/// Number of metadata lines at the top of every preview file.
pub const HEADER_LINES: usize = 4;

/// Prefix on header line 2 that carries the human-readable font title.
pub const TITLE_PREFIX: &str = "font: ";

/// One preview file split into its metadata header and art content.
///
/// The format convention is fixed: the first four lines are metadata
/// (line 2 optionally `font: <Title>`), everything after is rendered art.
/// Files shorter than the header keep whatever lines they have and an
/// empty content region.
pub struct ArtFile {
    pub header: Vec<String>,
    pub content: Vec<String>,
}

impl ArtFile {
    /// Split raw file text into header and content lines.
    ///
    /// Line terminators are dropped by the split; a trailing `\r` left by
    /// mixed CRLF endings is handled at measurement time.
    pub fn parse(raw: &str) -> Self {
        let mut header: Vec<String> = raw.lines().map(str::to_string).collect();
        let content = if header.len() > HEADER_LINES {
            header.split_off(HEADER_LINES)
        } else {
            Vec::new()
        };
        ArtFile { header, content }
    }

    /// The font title from header line 2, if that line carries one.
    pub fn title(&self) -> Option<&str> {
        self.header.get(1)?.trim_end().strip_prefix(TITLE_PREFIX)
    }

    /// Widest visible line in the art content; 0 when there is no content.
    pub fn max_visible_width(&self, gauge: &WidthGauge) -> usize {
        self.content
            .iter()
            .map(|line| gauge.visible_width(line.trim_end_matches(['\n', '\r'])))
            .max()
            .unwrap_or(0)
    }

    /// True when every content line is blank after trimming whitespace.
    ///
    /// Vacuously true for an empty content region, so a file of four or
    /// fewer lines always qualifies.
    pub fn content_is_blank(&self) -> bool {
        self.content.iter().all(|line| line.trim().is_empty())
    }
}
