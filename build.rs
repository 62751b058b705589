//! Build script for loom-migrate
//!
//! Embeds build-time information into the binary: git commit hash,
//! build timestamp, target triple, and rustc version.

use std::env;
use std::process::Command;

fn main() {
    // Rerun if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let git_hash = git(&["rev-parse", "--short=8", "HEAD"]).unwrap_or_else(|| "unknown".into());
    let git_branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".into());
    let git_dirty = match git(&["status", "--porcelain"]) {
        Some(out) => {
            if out.is_empty() {
                "false"
            } else {
                "true"
            }
        }
        None => "unknown",
    };

    let build_timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let rustc_version = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=LOOM_MIGRATE_GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=LOOM_MIGRATE_GIT_BRANCH={}", git_branch);
    println!("cargo:rustc-env=LOOM_MIGRATE_GIT_DIRTY={}", git_dirty);
    println!("cargo:rustc-env=LOOM_MIGRATE_BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=LOOM_MIGRATE_TARGET={}", target);
    println!("cargo:rustc-env=LOOM_MIGRATE_PROFILE={}", profile);
    println!("cargo:rustc-env=LOOM_MIGRATE_RUSTC_VERSION={}", rustc_version);
}

/// Run a git subcommand and return its trimmed stdout
fn git(args: &[&str]) -> Option<String> {
    command_output("git", args)
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
