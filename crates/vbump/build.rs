use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let hash = git(&["rev-parse", "--short", "HEAD"]);

    let version_string = match hash {
        Some(_) if is_tagged_release(version) => version.to_owned(),
        hash => {
            let hash = hash.unwrap_or_else(|| "unknown".to_owned());
            let build_date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            format!("{version}+{hash}.{build_date}")
        }
    };

    println!("cargo:rustc-env=VBUMP_VERSION={version_string}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8(output.stdout).ok()?.trim().to_owned())
}

/// Whether `HEAD` carries the `v{version}` tag.
fn is_tagged_release(version: &str) -> bool {
    let expected = format!("v{version}");
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|tag| tag.trim() == expected))
}
