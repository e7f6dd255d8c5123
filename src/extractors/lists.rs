// src/extractors/lists.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Leading bullet glyphs: hyphen, asterisk, or the Unicode bullet dot.
static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\-\*\u{2022}]+\s*").expect("Failed to compile BULLET_PREFIX_RE")
});

// Numbered item: "<integer>. <text>" up to the newline. The capture stops at
// the newline, so an unterminated final line is not treated as an item.
static NUMBERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.\s*([^\n]*)\n").expect("Failed to compile NUMBERED_ITEM_RE")
});

// Trailing emphasis glyphs left behind when a bolded item loses its leading
// `- **` decoration. Trailing hyphens are data here; the sanitizer trims them.
static TRAILING_GLYPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\*\u{2022}]+\s*$").expect("Failed to compile TRAILING_GLYPH_RE")
});

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE")
});

/// Strips leading bullet decoration, trailing emphasis glyphs, and
/// surrounding whitespace from a line.
pub fn clean_line(line: &str) -> String {
    let stripped = BULLET_PREFIX_RE.replace(line.trim(), "");
    TRAILING_GLYPH_RE.replace(&stripped, "").trim().to_string()
}

/// Collapses every internal whitespace run to a single space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text.trim(), " ").to_string()
}

/// Extracts `N. text` items from a block, decoration-stripped, in document
/// order. Items that strip to empty are kept here; pruning is the
/// sanitizer's job.
pub fn numbered_items(block: &str) -> Vec<String> {
    NUMBERED_ITEM_RE
        .captures_iter(block)
        .map(|caps| clean_line(&caps[1]))
        .collect()
}

/// Splits a block into lines, strips bullet decoration from each, and keeps
/// only the lines that remain non-empty, in order.
pub fn list_items(block: &str) -> Vec<String> {
    block
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_items_in_document_order() {
        let block = "1. Improve sleep\n2. Reduce sugar\n";
        assert_eq!(numbered_items(block), vec!["Improve sleep", "Reduce sugar"]);
    }

    #[test]
    fn numbered_item_requires_newline_termination() {
        // The final line has no trailing newline, so only the first item matches.
        let block = "1. Improve sleep\n2. Reduce sugar";
        assert_eq!(numbered_items(block), vec!["Improve sleep"]);
    }

    #[test]
    fn numbered_items_skip_prose_lines() {
        let block = "Top priorities below.\n1. Hydrate\nmake it detailed\n2. Walk daily\n";
        assert_eq!(numbered_items(block), vec!["Hydrate", "Walk daily"]);
    }

    #[test]
    fn list_items_strip_bullets_and_blanks() {
        let block = "- Strong lipid profile\n\n* Stable glucose control\n• Good hydration\n   \n";
        assert_eq!(
            list_items(block),
            vec!["Strong lipid profile", "Stable glucose control", "Good hydration"]
        );
    }

    #[test]
    fn bolded_list_item_loses_its_emphasis_markers() {
        assert_eq!(clean_line("- **None identified**"), "None identified");
        // Only line-edge glyphs are decoration; interior markers are data.
        assert_eq!(clean_line("* Vitamin D low **check in 3 months** "), "Vitamin D low **check in 3 months");
    }

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn clean_line_keeps_interior_hyphens() {
        // Only leading decoration is stripped; hyphenated words survive.
        assert_eq!(clean_line("- Reduce high-sugar snacks"), "Reduce high-sugar snacks");
    }
}
