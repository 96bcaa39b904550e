//! OS identity resolution.
//!
//! Branches on a closed [`OsFamily`] variant rather than scattering string
//! comparisons, so supporting a new family is a localized change. All
//! composition helpers are pure so each family's formatting is testable on
//! any host.

use sysinfo::System;

const OS_RELEASE_PATH: &str = "/etc/os-release";
const UNKNOWN_DISTRO: &str = "Linux (unknown distribution)";
const UNKNOWN_RELEASE: &str = "unknown";

/// Host OS family, detected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Windows,
    Other(String),
}

pub fn detect_family() -> OsFamily {
    match std::env::consts::OS {
        "linux" => OsFamily::Linux,
        "windows" => OsFamily::Windows,
        other => OsFamily::Other(other.to_string()),
    }
}

/// Resolve the human-readable OS identity string. Never empty.
pub fn resolve_identity() -> String {
    match detect_family() {
        OsFamily::Linux => resolve_linux(),
        OsFamily::Windows => {
            let version = os_release_tag();
            compose_windows(release_before_build(&version), &os_build_tag())
        }
        OsFamily::Other(family) => {
            let name = System::name().unwrap_or(family);
            compose_other(&name, &os_release_tag())
        }
    }
}

fn os_release_tag() -> String {
    System::os_version().unwrap_or_else(|| UNKNOWN_RELEASE.into())
}

fn os_build_tag() -> String {
    System::kernel_version().unwrap_or_else(|| UNKNOWN_RELEASE.into())
}

/// sysinfo reports the Windows version as `"<release> (<build>)"` while the
/// build number comes separately; keep only the release so the composed
/// string carries the build exactly once.
fn release_before_build(version: &str) -> &str {
    version
        .split_once(" (")
        .map(|(release, _)| release)
        .unwrap_or(version)
        .trim()
}

fn resolve_linux() -> String {
    let Ok(raw) = std::fs::read_to_string(OS_RELEASE_PATH) else {
        return UNKNOWN_DISTRO.to_string();
    };
    match parse_os_release_field(&raw, "PRETTY_NAME") {
        Some(pretty) => {
            let codename = parse_os_release_field(&raw, "VERSION_CODENAME");
            compose_linux(&pretty, codename.as_deref())
        }
        None => UNKNOWN_DISTRO.to_string(),
    }
}

/// Compose the Linux display name without duplicating the codename.
///
/// A pretty name that already carries a parenthesized suffix (Debian's style),
/// or that mentions the codename anywhere case-insensitively, is emitted
/// unchanged; otherwise the codename is appended in parentheses.
pub fn compose_linux(pretty: &str, codename: Option<&str>) -> String {
    let Some(codename) = codename.filter(|c| !c.is_empty()) else {
        return pretty.to_string();
    };
    if pretty.contains('(') || pretty.to_lowercase().contains(&codename.to_lowercase()) {
        pretty.to_string()
    } else {
        format!("{pretty} ({codename})")
    }
}

pub fn compose_windows(release: &str, build: &str) -> String {
    format!("Windows {release} (build {build})")
}

pub fn compose_other(family: &str, release: &str) -> String {
    format!("{family} {release}")
}

fn parse_os_release_field(content: &str, field: &str) -> Option<String> {
    content
        .lines()
        .find(|l| l.starts_with(&format!("{field}=")))
        .map(|l| {
            l.split_once('=')
                .map(|(_, v)| v)
                .unwrap_or("")
                .trim_matches('"')
                .to_string()
        })
        .filter(|v| !v.is_empty())
}
