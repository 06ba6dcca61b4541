pub mod classify;

pub use classify::{LineToken, MetaKey, classify};

use crate::models::{Deck, Slide, SlideKind, SlideLayout};

/// Why a candidate slide was dropped during compilation.
///
/// Compilation never fails outright; malformed sections degrade to a smaller
/// deck plus one diagnostic per missing required field. `section` is the
/// 1-based position among non-empty sections of the source document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("section {section} has no `# ` headline and was skipped")]
    MissingHeadline { section: usize },
    #[error("section {section} has no `Chapter:` label and was skipped")]
    MissingChapter { section: usize },
}

/// Result of one compile pass: the accepted slides and anything dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDeck {
    pub deck: Deck,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile a deck document into slides plus drop diagnostics.
///
/// Ids are assigned contiguously from 1 over the accepted slides only;
/// a rejected section consumes a section ordinal but not an id.
pub fn compile(text: &str) -> CompiledDeck {
    let mut slides = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, section) in split_sections(text).into_iter().enumerate() {
        let candidate_id = slides.len() as u32 + 1;
        match build_slide(&section, candidate_id, index + 1) {
            Ok(slide) => slides.push(slide),
            Err(dropped) => {
                for diagnostic in dropped {
                    log::warn!("{diagnostic}");
                    diagnostics.push(diagnostic);
                }
            }
        }
    }

    CompiledDeck {
        deck: Deck::new(slides),
        diagnostics,
    }
}

/// Convenience: compile and keep only the accepted slides.
pub fn parse(text: &str) -> Deck {
    compile(text).deck
}

/// Split the document into non-empty sections on `---`-only lines.
///
/// Tolerant of `\r\n` endings and of blank lines around the separator;
/// sections with no non-blank line are discarded.
fn split_sections(text: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim() == "---" {
            if current.iter().any(|l| !l.trim().is_empty()) {
                sections.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if current.iter().any(|l| !l.trim().is_empty()) {
        sections.push(current);
    }

    sections
}

/// Run the section state machine over classified lines.
fn build_slide(lines: &[&str], id: u32, section: usize) -> Result<Slide, Vec<Diagnostic>> {
    let mut headline: Option<String> = None;
    let mut chapter: Option<String> = None;
    let mut slide = Slide::new(id, "", "");
    let mut in_list = false;

    for line in lines {
        match classify(line) {
            LineToken::Blank => {} // never terminates list mode
            LineToken::Heading(text) => {
                // First heading wins; later ones are ignored.
                if headline.is_none() {
                    headline = Some(text.to_string());
                }
            }
            LineToken::Metadata(key, value) => {
                in_list = false;
                apply_metadata(&mut slide, &mut chapter, key, value);
            }
            LineToken::ListEnter => in_list = true,
            LineToken::ListItem(text) => {
                if in_list {
                    slide.body.push(text.to_string());
                }
            }
            LineToken::Text(text) => {
                // Inside list mode any non-blank line counts as an item;
                // outside it unrecognized lines are skipped silently.
                if in_list {
                    slide.body.push(text.to_string());
                }
            }
        }
    }

    let mut dropped = Vec::new();
    match headline {
        Some(h) if !h.is_empty() => slide.headline = h,
        _ => dropped.push(Diagnostic::MissingHeadline { section }),
    }
    match chapter {
        Some(c) if !c.is_empty() => slide.chapter = c,
        _ => dropped.push(Diagnostic::MissingChapter { section }),
    }

    if dropped.is_empty() { Ok(slide) } else { Err(dropped) }
}

fn apply_metadata(slide: &mut Slide, chapter: &mut Option<String>, key: MetaKey, value: &str) {
    match key {
        MetaKey::Chapter => *chapter = Some(value.to_string()),
        MetaKey::Kind => slide.kind = SlideKind::from_value(value),
        MetaKey::Layout => slide.layout = SlideLayout::from_value(value),
        MetaKey::Accent => slide.accent = value.eq_ignore_ascii_case("true"),
        MetaKey::Notes => slide.notes = Some(value.to_string()),
        MetaKey::Image => slide.image = Some(value.to_string()),
        MetaKey::ImageAlt => slide.image_alt = Some(value.to_string()),
    }
}
