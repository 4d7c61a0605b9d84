//! Build script stamping build information into the footer.
//!
//! Sets environment variables at compile time:
//! - BUILD_HOST: hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp (UTC)

use std::process::Command;

/// Trimmed stdout of `program`, or "unknown" if it cannot be run.
fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let stamps = [
        ("BUILD_HOST", command_output("hostname", &["-s"])),
        (
            "BUILD_COMMIT",
            command_output("git", &["rev-parse", "--short", "HEAD"]),
        ),
        (
            "BUILD_TIMESTAMP",
            command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]),
        ),
    ];
    for (key, value) in stamps {
        println!("cargo:rustc-env={key}={value}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
