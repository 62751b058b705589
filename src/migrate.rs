//! Per-directory migration pipeline and batch driver
//!
//! Each persona directory is converted with an ordered sequence of fallible
//! steps: read the legacy documents, write SKILL.md, relocate auxiliary
//! files into references/, delete the legacy sources. Steps are best-effort;
//! a failure aborts the remaining steps for that directory only and is never
//! rolled back. No state is shared between directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::MigratorConfig;
use crate::error::{Error, Result};
use crate::extract::extract_frontmatter;
use crate::scanner::scan_personas;
use crate::skill::assemble_skill_document;

pub const PERSONA_FILE: &str = "PERSONA.md";
pub const QUICK_START_FILE: &str = "AI_START_HERE.md";
pub const SKILL_FILE: &str = "SKILL.md";
pub const REFERENCES_DIR: &str = "references";

/// Aggregate result of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Directories successfully converted
    pub converted: usize,
    /// Directories discovered
    pub total: usize,
}

/// Convert every persona directory under the configured root.
///
/// Per-directory failures are reported and skipped; only a missing root
/// aborts the run. Progress goes to stdout.
pub fn run_migration(config: &MigratorConfig) -> Result<MigrationSummary> {
    let root = config.root_dir();
    let personas = scan_personas(&root, &config.migration.skip_orgs)?;

    println!("Found {} personas to convert\n", personas.len());

    let mut converted = 0;
    for persona in &personas {
        println!("Converting {}...", persona.rel_path());
        match migrate_persona(&persona.path) {
            Ok(()) => {
                converted += 1;
                info!(persona = %persona.rel_path(), "Persona converted");
            }
            Err(e @ Error::MissingPersonaFile { .. }) => {
                println!("  skipped: {}", e);
                warn!(persona = %persona.rel_path(), "Persona skipped, no PERSONA.md");
            }
            Err(e) if e.is_directory_scoped() => {
                println!("  failed: {}", e);
                warn!(persona = %persona.rel_path(), error = %e.format_for_log(), "Persona failed");
            }
            Err(e) => return Err(e),
        }
        println!();
    }

    println!("{}/{} personas converted", converted, personas.len());

    Ok(MigrationSummary {
        converted,
        total: personas.len(),
    })
}

/// Convert a single persona directory to the skill format.
///
/// Requires `PERSONA.md`; `AI_START_HERE.md` is optional. On success the
/// directory contains `SKILL.md` (plus `references/` if the directory held
/// auxiliary files) and the legacy documents are gone.
pub fn migrate_persona(dir: &Path) -> Result<()> {
    let persona_path = dir.join(PERSONA_FILE);
    if !persona_path.exists() {
        return Err(Error::MissingPersonaFile {
            dir: dir.to_path_buf(),
        });
    }

    let persona_text = read_file(&persona_path)?;
    let quick_start_path = dir.join(QUICK_START_FILE);
    let quick_start_text = if quick_start_path.exists() {
        read_file(&quick_start_path)?
    } else {
        String::new()
    };

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let frontmatter = extract_frontmatter(&persona_text, &name);
    let document = assemble_skill_document(&frontmatter, &persona_text, &quick_start_text)?;

    let skill_path = dir.join(SKILL_FILE);
    fs::write(&skill_path, document).map_err(|e| Error::IoWrite {
        path: skill_path,
        source: e,
    })?;
    println!("  created {}", SKILL_FILE);
    debug!(persona = %name, "SKILL.md written");

    move_reference_files(dir)?;

    remove_file(&persona_path)?;
    println!("  removed {}", PERSONA_FILE);
    if quick_start_path.exists() {
        remove_file(&quick_start_path)?;
        println!("  removed {}", QUICK_START_FILE);
    }

    Ok(())
}

/// Move auxiliary files into the references/ subdirectory.
///
/// Only direct child files count; the three format files stay in place. A
/// name collision under references/ fails the directory rather than
/// overwrite; files already moved stay moved.
fn move_reference_files(dir: &Path) -> Result<()> {
    let mut extra_files: Vec<PathBuf> = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| Error::IoRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if matches!(file_name.as_str(), SKILL_FILE | PERSONA_FILE | QUICK_START_FILE) {
            continue;
        }
        extra_files.push(entry.path());
    }

    if extra_files.is_empty() {
        return Ok(());
    }
    extra_files.sort();

    let ref_dir = dir.join(REFERENCES_DIR);
    fs::create_dir_all(&ref_dir).map_err(|e| Error::IoWrite {
        path: ref_dir.clone(),
        source: e,
    })?;

    for file in extra_files {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = ref_dir.join(&file_name);
        if dest.exists() {
            return Err(Error::ReferenceCollision {
                name: file_name,
                dir: dir.to_path_buf(),
            });
        }
        fs::rename(&file, &dest).map_err(|e| Error::IoRename {
            from: file.clone(),
            to: dest,
            source: e,
        })?;
        println!("  moved {} -> {}/", file_name, REFERENCES_DIR);
        debug!(file = %file_name, "Reference file relocated");
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::IoRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::IoRemove {
        path: path.to_path_buf(),
        source: e,
    })
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
