//! Pure text layout: converts optimised-resume text into pages of draw
//! operations. No I/O here — `pdf.rs` serialises the result.
//!
//! The cursor walks down from the top margin; page breaks are checked after
//! a fragment or heading block has been drawn, never before, so the last
//! fragment on a page may sit below the bottom margin by at most one line
//! height. This matches the output of the tool this renderer replaces.

use crate::render::metrics::{get_metrics, FontStyle};

/// A4 page, 1-inch margins. All values in PostScript points.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageGeometry {
    /// A4 (595.276 × 841.89 pt) with 1" margins on all sides.
    pub fn a4() -> Self {
        Self {
            width: 595.276,
            height: 841.89,
            margin: 72.0,
        }
    }

    pub fn left_margin(&self) -> f64 {
        self.margin
    }

    pub fn right_margin(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top_y(&self) -> f64 {
        self.height - self.margin
    }

    pub fn bottom_y(&self) -> f64 {
        self.margin
    }

    /// Maximum allowed width of a drawn text fragment.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }
}

/// Cursor advance for a blank input line.
const BLANK_LINE_GAP: f64 = 14.0;
/// Body text: Times Roman 11pt with 14pt leading.
const BODY_FONT_SIZE: f64 = 11.0;
const BODY_LEADING: f64 = 14.0;
/// Headings: Times Bold 13pt, a rule 8pt below the baseline, then 18pt.
const HEADING_FONT_SIZE: f64 = 13.0;
const HEADING_RULE_GAP: f64 = 8.0;
const HEADING_AFTER_GAP: f64 = 18.0;
const RULE_THICKNESS: f64 = 0.7;
/// Trimmed all-caps lines longer than this are body text, not headings.
const HEADING_MAX_CHARS: usize = 40;

/// One drawing instruction. Coordinates are in points with the origin at
/// the bottom-left of the page; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        content: String,
    },
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
        thickness: f64,
    },
}

#[derive(Debug, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// A paginated sequence of draw operations derived from the resume text.
#[derive(Debug)]
pub struct RenderedDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

/// A line is a heading iff, after trimming, it is entirely upper-case (at
/// least one cased character, no lowercase ones) and at most 40 characters.
/// The length cap keeps long uppercase body sentences out.
pub fn is_heading(trimmed: &str) -> bool {
    let has_cased = trimmed.chars().any(|c| c.is_uppercase() || c.is_lowercase());
    has_cased
        && !trimmed.chars().any(|c| c.is_lowercase())
        && trimmed.chars().count() <= HEADING_MAX_CHARS
}

/// Lays the text out into pages. Every input line maps to zero (blank) or
/// more drawn fragments; no fragment's measured width exceeds the content
/// width.
pub fn layout(text: &str, geometry: PageGeometry) -> RenderedDocument {
    let body = get_metrics(FontStyle::Roman);
    let left = geometry.left_margin();
    let right = geometry.right_margin();
    let content_width = geometry.content_width();

    let mut pages = vec![Page::default()];
    let mut y = geometry.top_y();

    // Starts a fresh page when the cursor has crossed the bottom margin.
    // Called only after drawing — see the module docs for why.
    let break_page_if_needed = |pages: &mut Vec<Page>, y: &mut f64| {
        if *y < geometry.bottom_y() {
            pages.push(Page::default());
            *y = geometry.top_y();
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            y -= BLANK_LINE_GAP;
            continue;
        }

        if is_heading(trimmed) {
            let page = pages.last_mut().expect("at least one page");
            page.ops.push(DrawOp::Text {
                x: left,
                y,
                size: HEADING_FONT_SIZE,
                bold: true,
                content: trimmed.to_string(),
            });
            y -= HEADING_RULE_GAP;
            page.ops.push(DrawOp::Rule {
                x1: left,
                x2: right,
                y,
                thickness: RULE_THICKNESS,
            });
            y -= HEADING_AFTER_GAP;
            break_page_if_needed(&mut pages, &mut y);
            continue;
        }

        // Greedy word wrap: grow the fragment while the measured width of
        // fragment + next word stays under the content width.
        let mut current = String::new();
        for word in line.split_whitespace() {
            let candidate_width = body.width_pt(&format!("{current}{word}"), BODY_FONT_SIZE);
            if candidate_width < content_width {
                current.push_str(word);
                current.push(' ');
            } else {
                let fragment = current.trim().to_string();
                if !fragment.is_empty() {
                    pages.last_mut().expect("at least one page").ops.push(DrawOp::Text {
                        x: left,
                        y,
                        size: BODY_FONT_SIZE,
                        bold: false,
                        content: fragment,
                    });
                }
                y -= BODY_LEADING;
                break_page_if_needed(&mut pages, &mut y);
                current = format!("{word} ");
            }
        }
        if !current.trim().is_empty() {
            pages.last_mut().expect("at least one page").ops.push(DrawOp::Text {
                x: left,
                y,
                size: BODY_FONT_SIZE,
                bold: false,
                content: current.trim().to_string(),
            });
            y -= BODY_LEADING;
            break_page_if_needed(&mut pages, &mut y);
        }
    }

    RenderedDocument { geometry, pages }
}
