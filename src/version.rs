//! Version and build information
//!
//! Provides access to build-time embedded information.

use std::fmt;

/// Build information embedded at compile time
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Package version from Cargo.toml
    pub version: &'static str,
    /// Package name
    pub name: &'static str,
    /// Git commit hash (short)
    pub git_hash: &'static str,
    /// Git branch name
    pub git_branch: &'static str,
    /// Raw git dirty string ("true" or "false")
    git_dirty_str: &'static str,
    /// Build timestamp
    pub build_timestamp: &'static str,
    /// Target triple (e.g., x86_64-unknown-linux-gnu)
    pub target: &'static str,
    /// Build profile (debug/release)
    pub profile: &'static str,
    /// Rustc version used to build
    pub rustc_version: &'static str,
}

impl BuildInfo {
    /// Get the current build information
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            name: env!("CARGO_PKG_NAME"),
            git_hash: env!("LOOM_MIGRATE_GIT_HASH"),
            git_branch: env!("LOOM_MIGRATE_GIT_BRANCH"),
            git_dirty_str: env!("LOOM_MIGRATE_GIT_DIRTY"),
            build_timestamp: env!("LOOM_MIGRATE_BUILD_TIMESTAMP"),
            target: env!("LOOM_MIGRATE_TARGET"),
            profile: env!("LOOM_MIGRATE_PROFILE"),
            rustc_version: env!("LOOM_MIGRATE_RUSTC_VERSION"),
        }
    }

    /// Whether the working directory was dirty at build time
    pub fn git_dirty(&self) -> bool {
        self.git_dirty_str == "true"
    }

    /// Get the full version string (e.g., "0.1.0-abc12345")
    pub fn full_version(&self) -> String {
        if self.git_dirty() {
            format!("{}-{}-dirty", self.version, self.git_hash)
        } else {
            format!("{}-{}", self.version, self.git_hash)
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.full_version())
    }
}

/// Get the current build information
pub fn build_info() -> BuildInfo {
    BuildInfo::current()
}

/// Print version and build information to stdout
pub fn print_version() {
    let info = build_info();
    println!("{}", info);
    println!();
    println!("Build Information:");
    println!("  Git Hash:   {}{}", info.git_hash, if info.git_dirty() { " (dirty)" } else { "" });
    println!("  Git Branch: {}", info.git_branch);
    println!("  Built:      {}", info.build_timestamp);
    println!("  Target:     {}", info.target);
    println!("  Profile:    {}", info.profile);
    println!("  Rustc:      {}", info.rustc_version);
}
