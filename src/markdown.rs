//! Best-effort list reformatting for assistant replies.
//!
//! Models often emit lists run together on one line ("Steps: 1. Mix
//! 2. Bake"), which markdown renderers collapse into a single
//! paragraph. `reformat_lists` splits such runs so each item renders on
//! its own line.
//!
//! The transformation, per marker class (numbered `1. `, bullet `• `,
//! dash `- `): when the text contains at least two markers, every run
//! of spaces or tabs directly before a marker becomes a blank line.
//! Fewer than two markers means the text is left alone, which keeps
//! ordinary prose like "Founded in 1990. It grew." intact. Markers
//! already at the start of a line are never touched.
//!
//! Input/output pairs:
//!   "Steps: 1. Mix batter 2. Bake it"  -> "Steps:\n\n1. Mix batter\n\n2. Bake it"
//!   "Assets: • cash • receivables"     -> "Assets:\n\n• cash\n\n• receivables"
//!   "The capital of France is Paris."  -> unchanged
//!   "1. Mix\n2. Bake"                  -> unchanged
//!
//! This is a heuristic: two spaced hyphens in prose ("a - b - c") are
//! split as if they were a list.

use std::sync::OnceLock;

use regex::Regex;

struct ListPattern {
    /// Counts markers anywhere after whitespace or at the start.
    occurrences: Regex,
    /// Matches the horizontal whitespace gluing a marker to the
    /// previous item, capturing the marker itself.
    separator: Regex,
}

fn list_patterns() -> &'static [ListPattern; 3] {
    static PATTERNS: OnceLock<[ListPattern; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let pattern = |occurrences: &str, separator: &str| ListPattern {
            occurrences: Regex::new(occurrences).expect("list marker pattern compiles"),
            separator: Regex::new(separator).expect("list separator pattern compiles"),
        };
        [
            pattern(r"(?:^|\s)\d+\.\s", r"[ \t]+(\d+\.\s)"),
            pattern(r"(?:^|\s)•\s", r"[ \t]+(•\s)"),
            pattern(r"(?:^|\s)-\s", r"[ \t]+(-\s)"),
        ]
    })
}

/// Insert paragraph breaks into run-on list text. Pure function; text
/// without list markers passes through unchanged.
pub fn reformat_lists(text: &str) -> String {
    let mut current = text.to_string();
    for pattern in list_patterns() {
        if pattern.occurrences.find_iter(&current).count() >= 2 {
            current = pattern
                .separator
                .replace_all(&current, "\n\n$1")
                .into_owned();
        }
    }
    current
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_on_numbered_items_get_blank_lines() {
        let out = reformat_lists("Steps: 1. Mix batter 2. Bake it");
        assert_eq!(out, "Steps:\n\n1. Mix batter\n\n2. Bake it");
    }

    #[test]
    fn leading_marker_counts_toward_threshold() {
        let out = reformat_lists("1. Mix well 2. Bake");
        assert_eq!(out, "1. Mix well\n\n2. Bake");
    }

    #[test]
    fn prose_without_markers_passes_through() {
        let text = "The capital of France is Paris.";
        assert_eq!(reformat_lists(text), text);
    }

    #[test]
    fn single_numbered_reference_passes_through() {
        let text = "Founded in 1990. It grew fast after that.";
        assert_eq!(reformat_lists(text), text);
    }

    #[test]
    fn bullet_run_ons_split() {
        let out = reformat_lists("Current assets include: • cash • receivables • inventory");
        assert_eq!(
            out,
            "Current assets include:\n\n• cash\n\n• receivables\n\n• inventory"
        );
    }

    #[test]
    fn dash_run_ons_split() {
        let out = reformat_lists("Options: - debt - equity");
        assert_eq!(out, "Options:\n\n- debt\n\n- equity");
    }

    #[test]
    fn newline_separated_list_untouched() {
        let text = "1. Mix\n2. Bake";
        assert_eq!(reformat_lists(text), text);
    }

    #[test]
    fn markers_without_separating_space_untouched() {
        let text = "Version 1.2 and build 3.4 shipped.";
        assert_eq!(reformat_lists(text), text);
    }

    #[test]
    fn recipe_reply_renders_as_items() {
        let out = reformat_lists(
            "Sure! Here's a short version: 1. Preheat the oven to 350F 2. Mix dry ingredients 3. Add eggs and butter 4. Bake for 30 minutes",
        );
        assert!(out.contains("\n\n2. Mix dry ingredients"));
        assert!(out.contains("\n\n4. Bake for 30 minutes"));
    }
}
