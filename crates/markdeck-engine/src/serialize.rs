//! Canonical text emission, the inverse of [`crate::parsing`] for the
//! extended schema.
//!
//! Hand-written input is not guaranteed to round trip byte for byte (bare
//! list lines come back with a `-` marker, key aliases collapse to their
//! canonical spelling), but output of this serializer always re-parses to
//! the same deck and re-serializes to the same text.

use crate::models::{Deck, Slide};

/// Serialize a deck to its canonical text form.
///
/// Fixed key order per slide: heading, blank line, `Chapter`, `Type`,
/// `Layout`, `Accent`, then an optional `Body:` block, then `Image`/
/// `ImageAlt` (alt only alongside an image), then `Notes`.
pub fn serialize(deck: &Deck) -> String {
    let blocks: Vec<String> = deck.slides().iter().map(slide_block).collect();
    let mut out = blocks.join("\n\n---\n\n");
    out.push('\n');
    out
}

fn slide_block(slide: &Slide) -> String {
    let mut lines = vec![format!("# {}", slide.headline), String::new()];

    lines.push(format!("Chapter: {}", slide.chapter));
    lines.push(format!("Type: {}", slide.kind));
    lines.push(format!("Layout: {}", slide.layout));
    lines.push(format!("Accent: {}", slide.accent));

    if !slide.body.is_empty() {
        lines.push("Body:".to_string());
        for item in &slide.body {
            lines.push(format!("- {item}"));
        }
    }

    if let Some(image) = &slide.image {
        lines.push(format!("Image: {image}"));
        if let Some(alt) = &slide.image_alt {
            lines.push(format!("ImageAlt: {alt}"));
        }
    }

    if let Some(notes) = &slide.notes {
        lines.push(format!("Notes: {notes}"));
    }

    lines.join("\n")
}
