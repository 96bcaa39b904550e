//! Host hardware/OS detection for the first-run setup page.
//!
//! Everything here is best-effort: every resolution step has a fallback, so
//! [`get_sys_info`] always returns a fully populated descriptor and never
//! fails, even on unsupported or sandboxed hosts.

pub mod cpu;
pub mod os;

use serde::Serialize;
use sysinfo::System;

// Czech labels are a compatibility contract with the presentation templates.
const CORES_PHYSICAL_LABEL: &str = "fyzických";
const CORES_LOGICAL_LABEL: &str = "vláken";

/// Normalized snapshot of the host, rendered on the setup page.
///
/// Every field is a non-empty display string. The descriptor is recomputed
/// fresh on every call and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct HostDescriptor {
    /// Best-effort human-readable CPU model name
    pub cpu: String,
    /// Formatted physical/logical core counts
    pub cores: String,
    /// Total installed memory, GiB with two decimals
    pub ram: String,
    /// Human-readable OS name, version and (Linux) codename
    pub os: String,
    /// Raw machine architecture identifier
    pub arch: String,
    /// rustc version this binary was built with
    pub runtime_version: String,
    /// Caller-supplied application version tag, echoed verbatim
    pub ver: String,
}

/// Collect a [`HostDescriptor`] for the current host.
pub fn get_sys_info(version_tag: &str) -> HostDescriptor {
    let sys = System::new_all();

    HostDescriptor {
        cpu: cpu::resolve_model(&sys),
        cores: format_cores(sys.physical_core_count(), sys.cpus().len()),
        ram: format_ram(sys.total_memory()),
        os: os::resolve_identity(),
        arch: std::env::consts::ARCH.to_string(),
        runtime_version: env!("KLUCON_RUSTC_VERSION").to_string(),
        ver: version_tag.to_string(),
    }
}

/// An unknown physical count falls back to the logical count so the field is
/// never empty or zero on exotic hosts.
fn format_cores(physical: Option<usize>, logical: usize) -> String {
    let physical = physical.filter(|&n| n > 0).unwrap_or(logical);
    format!("{physical} {CORES_PHYSICAL_LABEL} / {logical} {CORES_LOGICAL_LABEL}")
}

fn format_ram(total_bytes: u64) -> String {
    let gib = total_bytes as f64 / (1024u64.pow(3) as f64);
    format!("{gib:.2} GB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cores_format_uses_czech_labels() {
        assert_eq!(format_cores(Some(4), 8), "4 fyzických / 8 vláken");
    }

    #[test]
    fn cores_unknown_physical_falls_back_to_logical() {
        assert_eq!(format_cores(None, 8), "8 fyzických / 8 vláken");
        assert_eq!(format_cores(Some(0), 2), "2 fyzických / 2 vláken");
    }

    #[test]
    fn ram_sixteen_gib_exact() {
        assert_eq!(format_ram(16 * 1024 * 1024 * 1024), "16.00 GB");
    }

    #[test]
    fn ram_rounds_to_two_decimals() {
        // 7.8 GiB and change
        assert_eq!(format_ram(8_375_186_227), "7.80 GB");
    }

    #[test]
    fn descriptor_fields_are_always_populated() {
        let info = get_sys_info("0.1.0");
        assert!(!info.cpu.is_empty());
        assert!(!info.cores.is_empty());
        assert!(!info.ram.is_empty());
        assert!(!info.os.is_empty());
        assert!(!info.arch.is_empty());
        assert!(!info.runtime_version.is_empty());
        assert_eq!(info.ver, "0.1.0");
    }

    #[test]
    fn version_tag_echoed_verbatim() {
        let tag = "v2.0.1-rc.3+build!?";
        assert_eq!(get_sys_info(tag).ver, tag);
    }
}
