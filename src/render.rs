use crate::compare::{Segment, is_whitespace_token};
use owo_colors::{OwoColorize, Style};

// (r, g, b) triples
const REMOVED_WORD_BG: (u8, u8, u8) = (255, 170, 170);
const ADDED_WORD_BG: (u8, u8, u8) = (170, 255, 170);
const REMOVED_TEXT_COLOR: (u8, u8, u8) = (150, 0, 0);
const ADDED_TEXT_COLOR: (u8, u8, u8) = (0, 100, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Inline word-diff markers, safe for any output
    #[default]
    Plain,
    /// ANSI truecolor highlighting
    Color,
}

/// Render a segment list as a single inline view of both texts
pub fn render(segments: &[Segment], style: RenderStyle) -> String {
    let mut out = String::new();
    for segment in segments {
        match style {
            RenderStyle::Plain => push_plain(&mut out, segment),
            RenderStyle::Color => push_colored(&mut out, segment),
        }
    }
    out
}

fn push_plain(out: &mut String, segment: &Segment) {
    match segment {
        Segment::Equal { value } => out.push_str(value),
        Segment::Insert { value } => {
            out.push_str("{+");
            out.push_str(value);
            out.push_str("+}");
        }
        Segment::Delete { value } => {
            out.push_str("[-");
            out.push_str(value);
            out.push_str("-]");
        }
        Segment::Replace {
            old_value,
            new_value,
        } => {
            push_plain(out, &Segment::delete(old_value.as_str()));
            push_plain(out, &Segment::insert(new_value.as_str()));
        }
    }
}

fn removed_style(text: &str) -> Style {
    let (r, g, b) = REMOVED_WORD_BG;
    let style = Style::new().on_truecolor(r, g, b);
    if is_whitespace_token(text) {
        // strikethrough is invisible on blanks
        return style;
    }
    let (r, g, b) = REMOVED_TEXT_COLOR;
    style.truecolor(r, g, b).strikethrough()
}

fn added_style() -> Style {
    let (r, g, b) = ADDED_WORD_BG;
    let (fr, fg, fb) = ADDED_TEXT_COLOR;
    Style::new().on_truecolor(r, g, b).truecolor(fr, fg, fb)
}

fn push_colored(out: &mut String, segment: &Segment) {
    match segment {
        Segment::Equal { value } => out.push_str(value),
        Segment::Insert { value } => {
            out.push_str(&value.style(added_style()).to_string());
        }
        Segment::Delete { value } => {
            out.push_str(&value.style(removed_style(value)).to_string());
        }
        Segment::Replace {
            old_value,
            new_value,
        } => {
            out.push_str(&old_value.style(removed_style(old_value)).to_string());
            out.push_str(&new_value.style(added_style()).to_string());
        }
    }
}
