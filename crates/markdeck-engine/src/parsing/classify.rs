/// Recognized metadata keys, resolved through one case-insensitive alias
/// table so the apply path and the list-mode exit path can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Chapter,
    Kind,
    Layout,
    Accent,
    Notes,
    Image,
    ImageAlt,
}

impl MetaKey {
    /// Look a key name up in the alias table. `type` and `kind` are the two
    /// historical spellings of the same field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chapter" => Some(MetaKey::Chapter),
            "type" | "kind" => Some(MetaKey::Kind),
            "layout" => Some(MetaKey::Layout),
            "accent" => Some(MetaKey::Accent),
            "notes" => Some(MetaKey::Notes),
            "image" => Some(MetaKey::Image),
            "imagealt" => Some(MetaKey::ImageAlt),
            _ => None,
        }
    }
}

/// Classification of a single source line containing only local facts.
///
/// This is phase 1 of the compile: each line is classified independently,
/// then the section state machine runs over the tokens. List mode never has
/// to push a line back for reprocessing because metadata lines arrive
/// already tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken<'a> {
    /// A `# ` heading line with its text.
    Heading(&'a str),
    /// A recognized `Key: value` line, value trimmed.
    Metadata(MetaKey, &'a str),
    /// A bare `body:`/`bullets:` line that enters list mode.
    ListEnter,
    /// A `- `/`* ` line with the marker stripped.
    ListItem(&'a str),
    /// Whitespace only.
    Blank,
    /// Anything else. Ignored outside list mode, a verbatim item inside it.
    Text(&'a str),
}

/// Classify one line into a [`LineToken`].
pub fn classify(line: &str) -> LineToken<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineToken::Blank;
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return LineToken::Heading(text.trim());
    }
    if trimmed.eq_ignore_ascii_case("body:") || trimmed.eq_ignore_ascii_case("bullets:") {
        return LineToken::ListEnter;
    }
    if let Some((name, value)) = trimmed.split_once(':')
        && let Some(key) = MetaKey::from_name(name)
    {
        return LineToken::Metadata(key, value.trim());
    }
    if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        && rest.starts_with(char::is_whitespace)
    {
        return LineToken::ListItem(rest.trim());
    }
    LineToken::Text(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_classify_as_blank() {
        assert_eq!(classify(""), LineToken::Blank);
        assert_eq!(classify("   \t"), LineToken::Blank);
    }

    #[test]
    fn first_level_heading_is_recognized() {
        assert_eq!(classify("# Opening"), LineToken::Heading("Opening"));
        assert_eq!(classify("  #   Padded  "), LineToken::Heading("Padded"));
    }

    #[test]
    fn deeper_headings_are_plain_text() {
        assert_eq!(classify("## Sub"), LineToken::Text("## Sub"));
        assert_eq!(classify("#NoSpace"), LineToken::Text("#NoSpace"));
    }

    #[test]
    fn metadata_keys_match_case_insensitively() {
        assert_eq!(
            classify("Chapter: Intro"),
            LineToken::Metadata(MetaKey::Chapter, "Intro")
        );
        assert_eq!(
            classify("chapter:Intro"),
            LineToken::Metadata(MetaKey::Chapter, "Intro")
        );
        assert_eq!(
            classify("IMAGEALT: a chart"),
            LineToken::Metadata(MetaKey::ImageAlt, "a chart")
        );
    }

    #[test]
    fn type_and_kind_are_aliases() {
        assert_eq!(
            classify("Type: hero"),
            LineToken::Metadata(MetaKey::Kind, "hero")
        );
        assert_eq!(
            classify("Kind: hero"),
            LineToken::Metadata(MetaKey::Kind, "hero")
        );
    }

    #[test]
    fn unknown_keys_are_plain_text() {
        assert_eq!(
            classify("Subtitle: legacy"),
            LineToken::Text("Subtitle: legacy")
        );
    }

    #[test]
    fn list_enter_accepts_both_spellings() {
        assert_eq!(classify("Body:"), LineToken::ListEnter);
        assert_eq!(classify("bullets:"), LineToken::ListEnter);
        assert_eq!(classify("  BULLETS:  "), LineToken::ListEnter);
    }

    #[test]
    fn list_items_need_marker_plus_whitespace() {
        assert_eq!(classify("- one"), LineToken::ListItem("one"));
        assert_eq!(classify("* two"), LineToken::ListItem("two"));
        assert_eq!(classify("-three"), LineToken::Text("-three"));
    }

    #[test]
    fn body_with_a_value_is_not_a_list_opener() {
        // `Body: x` is not a bare list opener; `body` is also not a
        // recognized metadata key, so the line falls through to text.
        assert_eq!(classify("Body: x"), LineToken::Text("Body: x"));
    }
}
