//! Build script for the ReSurve console
//!
//! Embeds git revision, build timestamp, target and toolchain into the binary
//! so `resurve version` can report exactly what is running.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let git_hash = command_output("git", &["rev-parse", "--short=8", "HEAD"]);
    let git_branch = command_output("git", &["rev-parse", "--abbrev-ref", "HEAD"]);
    let git_dirty = match Command::new("git").args(["status", "--porcelain"]).output() {
        Ok(out) if out.status.success() => {
            if out.stdout.is_empty() {
                "false"
            } else {
                "true"
            }
        }
        _ => "unknown",
    };
    let rustc_version = command_output("rustc", &["--version"]);

    let build_timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let vars = [
        ("RESURVE_GIT_HASH", git_hash),
        ("RESURVE_GIT_BRANCH", git_branch),
        ("RESURVE_GIT_DIRTY", git_dirty.to_string()),
        ("RESURVE_BUILD_TIMESTAMP", build_timestamp),
        ("RESURVE_TARGET", cargo_var("TARGET")),
        ("RESURVE_PROFILE", cargo_var("PROFILE")),
        ("RESURVE_HOST", cargo_var("HOST")),
        ("RESURVE_RUSTC_VERSION", rustc_version),
    ];

    for (key, value) in &vars {
        println!("cargo:rustc-env={}={}", key, value);
    }
}

/// Cargo-provided variable, or "unknown" outside of cargo.
fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| "unknown".to_string())
}

/// Trimmed stdout of a successful command, or "unknown".
fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
