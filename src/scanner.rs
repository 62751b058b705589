//! Persona directory discovery
//!
//! Walks the personas root two levels deep (organization → persona) and
//! collects candidate directories for migration. Read-only.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A persona directory discovered under the personas root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaDir {
    /// Organization directory name (first level)
    pub org: String,
    /// Persona directory name (second level)
    pub name: String,
    /// Full path to the persona directory
    pub path: PathBuf,
}

impl PersonaDir {
    /// Path relative to the personas root, e.g. "acme/data-analyst"
    pub fn rel_path(&self) -> String {
        format!("{}/{}", self.org, self.name)
    }
}

/// Discover persona directories under `root`, skipping the organizations
/// named in `skip_orgs`. The result is sorted by relative path.
pub fn scan_personas(root: &Path, skip_orgs: &[String]) -> Result<Vec<PersonaDir>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut personas = Vec::new();

    let orgs = fs::read_dir(root).map_err(|e| Error::IoRead {
        path: root.to_path_buf(),
        source: e,
    })?;

    for org_entry in orgs.flatten() {
        if !org_entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let org = org_entry.file_name().to_string_lossy().into_owned();
        if skip_orgs.iter().any(|s| s == &org) {
            debug!(org = %org, "Skipping reserved organization");
            continue;
        }

        let entries = match fs::read_dir(org_entry.path()) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(org = %org, error = %e, "Unreadable organization directory, skipping");
                continue;
            }
        };

        for entry in entries.flatten() {
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            personas.push(PersonaDir {
                org: org.clone(),
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
            });
        }
    }

    personas.sort_by(|a, b| a.rel_path().cmp(&b.rel_path()));
    debug!(count = personas.len(), root = %root.display(), "Scan complete");
    Ok(personas)
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn skip() -> Vec<String> {
        vec!["templates".to_string()]
    }

    #[test]
    fn test_missing_root() {
        let tmp = TempDir::new().unwrap();
        let result = scan_personas(&tmp.path().join("personas"), &skip());
        assert!(matches!(result, Err(Error::RootNotFound { .. })));
    }

    #[test]
    fn test_empty_root() {
        let tmp = TempDir::new().unwrap();
        let personas = scan_personas(tmp.path(), &skip()).unwrap();
        assert!(personas.is_empty());
    }

    #[test]
    fn test_two_level_discovery_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("zeta/writer")).unwrap();
        fs::create_dir_all(tmp.path().join("acme/reviewer")).unwrap();
        fs::create_dir_all(tmp.path().join("acme/analyst")).unwrap();

        let personas = scan_personas(tmp.path(), &skip()).unwrap();
        let rels: Vec<String> = personas.iter().map(|p| p.rel_path()).collect();
        assert_eq!(rels, vec!["acme/analyst", "acme/reviewer", "zeta/writer"]);
    }

    #[test]
    fn test_templates_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("templates/base")).unwrap();
        fs::create_dir_all(tmp.path().join("acme/analyst")).unwrap();

        let personas = scan_personas(tmp.path(), &skip()).unwrap();
        assert_eq!(personas.len(), 1);
        assert_eq!(personas[0].org, "acme");
    }

    #[test]
    fn test_plain_files_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.md"), "not an org").unwrap();
        fs::create_dir_all(tmp.path().join("acme")).unwrap();
        fs::write(tmp.path().join("acme/notes.txt"), "not a persona").unwrap();
        fs::create_dir_all(tmp.path().join("acme/analyst")).unwrap();

        let personas = scan_personas(tmp.path(), &skip()).unwrap();
        assert_eq!(personas.len(), 1);
        assert_eq!(personas[0].rel_path(), "acme/analyst");
    }

    #[test]
    fn test_scan_is_read_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("acme/analyst")).unwrap();
        fs::write(tmp.path().join("acme/analyst/PERSONA.md"), "# X\n").unwrap();

        scan_personas(tmp.path(), &skip()).unwrap();
        assert!(tmp.path().join("acme/analyst/PERSONA.md").exists());
    }
}
