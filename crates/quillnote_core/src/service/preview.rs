//! Plain-text preview derivation for list and grid cells.
//!
//! List and grid cells show a bounded snippet of the note body rather than
//! the full markdown source; the first embedded image, when present, becomes
//! the cell thumbnail.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derived cell projection of a note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePreview {
    /// Sanitized snippet, capped at 100 characters. `None` for bodies that
    /// reduce to nothing but markup.
    pub text: Option<String>,
    /// First markdown image path, when the body embeds one.
    pub image: Option<String>,
}

/// Derives the preview projection for one note body.
///
/// Rules:
/// - `image`: path of the first markdown image.
/// - `text`: images removed, links reduced to their label, markdown symbols
///   stripped, whitespace collapsed, first 100 chars retained.
pub fn derive_preview(content: &str) -> NotePreview {
    let image = IMAGE_RE
        .captures(content)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|value| !value.is_empty());

    let stripped = IMAGE_RE.replace_all(content, " ");
    let stripped = LINK_RE.replace_all(&stripped, "$1");
    let stripped = SYMBOL_RE.replace_all(&stripped, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let snippet = collapsed.trim();

    let text = if snippet.is_empty() {
        None
    } else {
        Some(snippet.chars().take(PREVIEW_MAX_CHARS).collect())
    };

    NotePreview { text, image }
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn first_image_path_becomes_thumbnail() {
        let preview = derive_preview("x ![a](one.png) y ![b](two.png)");
        assert_eq!(preview.image.as_deref(), Some("one.png"));
    }

    #[test]
    fn snippet_strips_markup_and_caps_length() {
        let source = "# Shopping\n\n- [site](https://example.com)\n**milk** `eggs`";
        let preview = derive_preview(source);
        let text = preview.text.expect("snippet should exist");
        assert!(text.contains("Shopping"));
        assert!(text.contains("site"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(text.chars().count() <= 100);
    }

    #[test]
    fn markup_only_body_yields_no_snippet() {
        let preview = derive_preview("---\n***\n");
        assert_eq!(preview.text, None);
        assert_eq!(preview.image, None);
    }
}
