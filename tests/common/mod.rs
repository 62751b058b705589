//! Common test utilities and fixtures
//!
//! Builds legacy persona trees in temp directories for migration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// PERSONA.md content exercising every extracted field
pub const ANALYST_PERSONA: &str =
    "# Data Analyst\nHelps with data.\n\nAutonomy Level: high\n\nSpecialties: sql, python, charts\n";

/// Minimal PERSONA.md content
pub const MINIMAL_PERSONA: &str = "# Helper\nDoes helpful things.\n";

/// Create `personas/<org>/<name>` under `root` and return the persona path
pub fn make_persona_dir(root: &Path, org: &str, name: &str) -> PathBuf {
    let dir = root.join("personas").join(org).join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a file inside a directory
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Read a file inside a directory
pub fn read_file(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}
