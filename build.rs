//! Captures the rustc version at build time for the setup-wizard hardware report.

use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc (unknown)".into());

    println!("cargo:rustc-env=KLUCON_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
