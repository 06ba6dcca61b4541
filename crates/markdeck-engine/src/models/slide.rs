use serde::Serialize;
use std::fmt;

/// Rendering variant for a slide.
///
/// Unrecognized source values normalize to [`SlideKind::Standard`] rather
/// than failing the compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    #[default]
    Standard,
    Hero,
    Data,
    Dark,
}

impl SlideKind {
    /// Parse a `Type:`/`Kind:` value, normalizing unknown values to the default.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hero" => SlideKind::Hero,
            "data" => SlideKind::Data,
            "dark" => SlideKind::Dark,
            _ => SlideKind::Standard,
        }
    }

    /// Canonical spelling used by the serializer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Standard => "standard",
            SlideKind::Hero => "hero",
            SlideKind::Data => "data",
            SlideKind::Dark => "dark",
        }
    }

    /// Whether the renderer should use a dark treatment for this variant.
    pub fn is_dark(&self) -> bool {
        matches!(self, SlideKind::Dark | SlideKind::Hero)
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement hint for a slide's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideLayout {
    #[default]
    Center,
    Grid2,
    Grid3,
    Stack,
}

impl SlideLayout {
    /// Parse a `Layout:` value, normalizing unknown values to the default.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid-2" => SlideLayout::Grid2,
            "grid-3" => SlideLayout::Grid3,
            "stack" => SlideLayout::Stack,
            _ => SlideLayout::Center,
        }
    }

    /// Canonical spelling used by the serializer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideLayout::Center => "center",
            SlideLayout::Grid2 => "grid-2",
            SlideLayout::Grid3 => "grid-3",
            SlideLayout::Stack => "stack",
        }
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of presentation content.
///
/// Slides are created once per compile pass and are immutable as parsed;
/// the only sanctioned update is a wholesale replacement via
/// [`Deck::with_image`](crate::models::Deck::with_image).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    /// 1-based position among accepted slides. Never reused or renumbered.
    pub id: u32,
    /// Non-empty label grouping consecutive slides for progress display.
    pub chapter: String,
    /// Required display title, taken from the first `# ` line of the section.
    pub headline: String,
    /// Ordered body items. Order is meaningful for layout and display.
    pub body: Vec<String>,
    pub notes: Option<String>,
    pub kind: SlideKind,
    pub layout: SlideLayout,
    pub accent: bool,
    /// Opaque asset reference. The engine never interprets the encoding.
    pub image: Option<String>,
    pub image_alt: Option<String>,
}

impl Slide {
    /// Create a slide with the required fields and defaults for the rest.
    pub fn new(id: u32, chapter: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            id,
            chapter: chapter.into(),
            headline: headline.into(),
            body: Vec::new(),
            notes: None,
            kind: SlideKind::default(),
            layout: SlideLayout::default(),
            accent: false,
            image: None,
            image_alt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_values_case_insensitively() {
        assert_eq!(SlideKind::from_value("hero"), SlideKind::Hero);
        assert_eq!(SlideKind::from_value("HERO"), SlideKind::Hero);
        assert_eq!(SlideKind::from_value(" Dark "), SlideKind::Dark);
        assert_eq!(SlideKind::from_value("data"), SlideKind::Data);
    }

    #[test]
    fn unknown_kind_normalizes_to_standard() {
        assert_eq!(SlideKind::from_value("lossAversion"), SlideKind::Standard);
        assert_eq!(SlideKind::from_value(""), SlideKind::Standard);
    }

    #[test]
    fn unknown_layout_normalizes_to_center() {
        assert_eq!(SlideLayout::from_value("mosaic"), SlideLayout::Center);
        assert_eq!(SlideLayout::from_value("grid-3"), SlideLayout::Grid3);
        assert_eq!(SlideLayout::from_value("Stack"), SlideLayout::Stack);
    }

    #[test]
    fn kind_round_trips_through_canonical_spelling() {
        for kind in [
            SlideKind::Standard,
            SlideKind::Hero,
            SlideKind::Data,
            SlideKind::Dark,
        ] {
            assert_eq!(SlideKind::from_value(kind.as_str()), kind);
        }
    }

    #[test]
    fn dark_treatment_covers_hero_and_dark() {
        assert!(SlideKind::Hero.is_dark());
        assert!(SlideKind::Dark.is_dark());
        assert!(!SlideKind::Standard.is_dark());
        assert!(!SlideKind::Data.is_dark());
    }
}
