//! Heuristic metadata extraction from PERSONA.md
//!
//! Best-effort field extraction from semi-structured markdown: the first
//! heading supplies the role, the first paragraph after the heading block
//! supplies the description, and labeled lines supply autonomy level and
//! specialties. The stopping rules below are deliberate and must not be
//! replaced by a general markdown parser; the output has to stay identical
//! on the existing persona corpus.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::skill::SkillFrontmatter;

/// Descriptions are truncated to this many characters
pub const MAX_DESCRIPTION_CHARS: usize = 500;

static AUTONOMY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Autonomy Level[:\s]+([a-z]+)").expect("static regex"));

static SPECIALTIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)Specialt(?:ies|y):\s*(.+)$").expect("static regex"));

/// Derive a skill frontmatter record from PERSONA.md content.
///
/// Missing patterns leave the corresponding fields unset; extraction never
/// fails.
pub fn extract_frontmatter(content: &str, persona_name: &str) -> SkillFrontmatter {
    let (role, description) = scan_role_and_description(content);

    let autonomy_level = AUTONOMY_RE
        .captures(content)
        .map(|c| c[1].to_lowercase());

    let specialties = SPECIALTIES_RE.captures(content).map(|c| {
        c[1].split(',')
            .map(|s| s.trim().to_string())
            .collect::<Vec<String>>()
    });

    SkillFrontmatter::new(persona_name, description, role, autonomy_level, specialties)
}

/// Scan lines top-to-bottom for the first heading (role) and the first
/// paragraph after the heading block (description).
///
/// Rules:
/// - A blank line ends the description once accumulation has started.
/// - A heading line switches back into header state; the first non-empty
///   heading text becomes the role.
/// - The first non-blank, non-heading line after a heading starts the
///   description (a list item can start it).
/// - Once started, a heading or list item line ends it.
fn scan_role_and_description(content: &str) -> (Option<String>, String) {
    let mut role: Option<String> = None;
    let mut desc_lines: Vec<&str> = Vec::new();
    let mut in_header = true;

    for raw in content.trim().lines() {
        let line = raw.trim();
        if line.is_empty() {
            if !desc_lines.is_empty() {
                break;
            }
            continue;
        }
        if line.starts_with('#') {
            in_header = true;
            if role.as_deref().map_or(true, str::is_empty) {
                role = Some(line.trim_start_matches('#').trim().to_string());
            }
            continue;
        }
        if in_header {
            desc_lines.push(line);
            in_header = false;
        } else if !line.starts_with('#') && !line.starts_with('-') {
            desc_lines.push(line);
        } else {
            break;
        }
    }

    // Headings with no text never become a role
    let role = role.filter(|r| !r.is_empty());
    let description = truncate_chars(&desc_lines.join(" "), MAX_DESCRIPTION_CHARS);
    (role, description)
}

/// Truncate to at most `max` characters (Unicode scalar values)
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_extraction() {
        let content =
            "# Data Analyst\nHelps with data.\n\nAutonomy Level: high\n\nSpecialties: sql, python, charts\n";
        let fm = extract_frontmatter(content, "data-analyst");

        assert_eq!(fm.name, "data-analyst");
        assert_eq!(fm.description, "Helps with data.");
        assert_eq!(fm.metadata.role.as_deref(), Some("Data Analyst"));
        assert_eq!(fm.metadata.autonomy_level.as_deref(), Some("high"));
        assert_eq!(
            fm.metadata.specialties,
            Some(vec!["sql".to_string(), "python".to_string(), "charts".to_string()])
        );
    }

    #[test]
    fn test_missing_patterns_leave_fields_unset() {
        let fm = extract_frontmatter("Just a paragraph of text.\n", "minimal");
        assert_eq!(fm.name, "minimal");
        assert_eq!(fm.description, "Just a paragraph of text.");
        assert!(fm.metadata.role.is_none());
        assert!(fm.metadata.autonomy_level.is_none());
        assert!(fm.metadata.specialties.is_none());
    }

    #[test]
    fn test_multi_line_description_joined() {
        let content = "# Reviewer\nReads pull requests\nand leaves comments.\n\nMore text.\n";
        let fm = extract_frontmatter(content, "reviewer");
        assert_eq!(fm.description, "Reads pull requests and leaves comments.");
    }

    #[test]
    fn test_description_stops_at_list_item() {
        let content = "# Planner\nPlans the work.\n- step one\n- step two\n";
        let fm = extract_frontmatter(content, "planner");
        assert_eq!(fm.description, "Plans the work.");
    }

    #[test]
    fn test_list_item_can_start_description() {
        // The first line after a heading is taken verbatim, even a list item
        let content = "# Planner\n- always plans first\nmore prose\n";
        let fm = extract_frontmatter(content, "planner");
        assert_eq!(fm.description, "- always plans first more prose");
    }

    #[test]
    fn test_role_from_first_heading_only() {
        let content = "# First Role\n\n## Second Heading\nDescription here.\n";
        let fm = extract_frontmatter(content, "p");
        assert_eq!(fm.metadata.role.as_deref(), Some("First Role"));
        assert_eq!(fm.description, "Description here.");
    }

    #[test]
    fn test_no_heading_means_no_role() {
        let content = "Opens with prose.\n\n# Late Heading\n";
        let fm = extract_frontmatter(content, "p");
        assert!(fm.metadata.role.is_none());
        assert_eq!(fm.description, "Opens with prose.");
    }

    #[test]
    fn test_autonomy_case_insensitive() {
        let fm = extract_frontmatter("autonomy level: HIGH\n", "p");
        assert_eq!(fm.metadata.autonomy_level.as_deref(), Some("high"));
    }

    #[test]
    fn test_autonomy_requires_separator() {
        // "Levels" runs straight into the label with no colon or space
        let fm = extract_frontmatter("Autonomy Levels are unset\n", "p");
        assert!(fm.metadata.autonomy_level.is_none());
    }

    #[test]
    fn test_specialty_singular_label() {
        let fm = extract_frontmatter("Specialty: databases\n", "p");
        assert_eq!(fm.metadata.specialties, Some(vec!["databases".to_string()]));
    }

    #[test]
    fn test_specialties_trimmed() {
        let fm = extract_frontmatter("Specialties:  sql ,  python ,charts\n", "p");
        assert_eq!(
            fm.metadata.specialties,
            Some(vec!["sql".to_string(), "python".to_string(), "charts".to_string()])
        );
    }

    #[test]
    fn test_description_truncated_to_500_chars() {
        let long = "x".repeat(600);
        let fm = extract_frontmatter(&format!("# T\n{}\n", long), "p");
        assert_eq!(fm.description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_truncation_is_char_aware() {
        let long = "é".repeat(600);
        let fm = extract_frontmatter(&format!("# T\n{}\n", long), "p");
        assert_eq!(fm.description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_empty_content() {
        let fm = extract_frontmatter("", "empty");
        assert_eq!(fm.name, "empty");
        assert!(fm.description.is_empty());
        assert!(fm.metadata.role.is_none());
    }
}
