//! Version and build information embedded by `build.rs`.

use std::fmt;

/// Build information embedded at compile time
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub name: &'static str,
    pub git_hash: &'static str,
    pub git_branch: &'static str,
    /// "true", "false" or "unknown"
    git_dirty_str: &'static str,
    pub build_timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc_version: &'static str,
    pub host: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            name: "resurve",
            git_hash: env!("RESURVE_GIT_HASH"),
            git_branch: env!("RESURVE_GIT_BRANCH"),
            git_dirty_str: env!("RESURVE_GIT_DIRTY"),
            build_timestamp: env!("RESURVE_BUILD_TIMESTAMP"),
            target: env!("RESURVE_TARGET"),
            profile: env!("RESURVE_PROFILE"),
            rustc_version: env!("RESURVE_RUSTC_VERSION"),
            host: env!("RESURVE_HOST"),
        }
    }

    pub fn git_dirty(&self) -> bool {
        self.git_dirty_str == "true"
    }

    /// Version with git revision, e.g. "0.1.0-abc1234"
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
        writeln!(f, "{} {}", self.name, self.full_version())?;
        writeln!(f)?;
        writeln!(f, "Build Information:")?;
        writeln!(f, "  Version:    {}", self.version)?;
        writeln!(
            f,
            "  Git Hash:   {}{}",
            self.git_hash,
            if self.git_dirty() { " (dirty)" } else { "" }
        )?;
        writeln!(f, "  Git Branch: {}", self.git_branch)?;
        writeln!(f, "  Built:      {}", self.build_timestamp)?;
        writeln!(f, "  Profile:    {}", self.profile)?;
        writeln!(f)?;
        writeln!(f, "Target:")?;
        writeln!(f, "  Triple:     {}", self.target)?;
        writeln!(f, "  Host:       {}", self.host)?;
        writeln!(f)?;
        writeln!(f, "Compiler:")?;
        writeln!(f, "  {}", self.rustc_version)
    }
}

/// Print version information to stdout
pub fn print_version() {
    print!("{}", BuildInfo::current());
}
