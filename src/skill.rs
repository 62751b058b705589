//! SKILL.md document format
//!
//! A skill document is YAML frontmatter between `---` delimiters followed by
//! a markdown body:
//!
//! ```yaml
//! ---
//! name: data-analyst
//! description: Helps with data.
//! metadata:
//!   role: Data Analyst
//!   author: loom
//!   version: '1.0'
//! license: Proprietary
//! compatibility: Designed for Loom
//! ---
//!
//! # Quick Start
//! ...
//! ```
//!
//! Field order in the frontmatter is fixed by struct declaration order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const LICENSE: &str = "Proprietary";
const COMPATIBILITY: &str = "Designed for Loom";
const AUTHOR: &str = "loom";
const SCHEMA_VERSION: &str = "1.0";

/// A single leading markdown heading (and the blank lines after it)
static LEADING_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[^#\n]+\n+").expect("static regex"));

/// A leading frontmatter block delimited by `---` lines
static FRONTMATTER_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^---\n.*?\n---\n").expect("static regex"));

/// Frontmatter record written at the top of SKILL.md
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillFrontmatter {
    /// Skill name; always the persona directory's base name
    pub name: String,
    /// Short description derived from the persona document (≤500 chars)
    pub description: String,
    /// Nested metadata block
    pub metadata: SkillMetadata,
    /// License marker
    pub license: String,
    /// Compatibility marker
    pub compatibility: String,
}

/// Nested metadata block of a skill frontmatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonomy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    pub author: String,
    pub version: String,
}

impl SkillFrontmatter {
    /// Build a record with the fixed Loom fields populated
    pub fn new(
        name: &str,
        description: String,
        role: Option<String>,
        autonomy_level: Option<String>,
        specialties: Option<Vec<String>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description,
            metadata: SkillMetadata {
                role,
                autonomy_level,
                specialties,
                author: AUTHOR.to_string(),
                version: SCHEMA_VERSION.to_string(),
            },
            license: LICENSE.to_string(),
            compatibility: COMPATIBILITY.to_string(),
        }
    }
}

/// Assemble the complete SKILL.md text from the frontmatter record, the
/// persona document, and the (possibly empty) quick-start document.
///
/// The quick-start content loses its original top heading and is folded in
/// under `# Quick Start`; the persona document loses any legacy frontmatter
/// block. The two parts are joined with a `---` separator line.
pub fn assemble_skill_document(
    frontmatter: &SkillFrontmatter,
    persona_text: &str,
    quick_start_text: &str,
) -> Result<String> {
    let yaml = serde_yaml::to_string(frontmatter)?;

    let mut parts: Vec<String> = Vec::new();

    let quick_start = quick_start_text.trim();
    if !quick_start.is_empty() {
        let stripped = LEADING_HEADING_RE.replace(quick_start, "");
        if !stripped.is_empty() {
            parts.push(format!("# Quick Start\n\n{}", stripped));
        }
    }

    if !persona_text.is_empty() {
        let stripped = FRONTMATTER_BLOCK_RE.replace(persona_text, "");
        parts.push(stripped.trim().to_string());
    }

    let body = parts.join("\n\n---\n\n");
    Ok(format!("---\n{}---\n\n{}\n", yaml, body))
}

/// Parse the frontmatter block back out of a skill document
pub fn parse_frontmatter(document: &str) -> Result<SkillFrontmatter> {
    let rest = document
        .strip_prefix("---\n")
        .ok_or_else(|| Error::Internal("document has no frontmatter delimiter".to_string()))?;
    let end = rest
        .find("\n---")
        .ok_or_else(|| Error::Internal("unterminated frontmatter block".to_string()))?;
    Ok(serde_yaml::from_str(&rest[..end + 1])?)
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
