//! CPU model name resolution.
//!
//! The sysinfo brand string is a good default, but on some Linux hosts
//! (containers, older ARM boards) it is empty or generic, so the kernel's
//! cpuinfo interface gets the last word when it has a model line.

use sysinfo::System;

#[cfg(target_os = "linux")]
const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Resolve the best-effort CPU model name. Never empty.
pub fn resolve_model(sys: &System) -> String {
    let mut model = sys
        .cpus()
        .first()
        .map(|c| c.brand().trim().to_string())
        .unwrap_or_default();

    if model.is_empty() {
        model = std::env::consts::ARCH.to_string();
    }

    #[cfg(target_os = "linux")]
    if let Some(kernel_model) = std::fs::read_to_string(CPUINFO_PATH)
        .ok()
        .and_then(|raw| scan_model_name(&raw))
    {
        model = kernel_model;
    }

    model
}

/// Scan cpuinfo text for the first `model name` (or, on ARM, `Model`) line
/// and return the trimmed value after the first colon.
#[cfg(any(target_os = "linux", test))]
fn scan_model_name(cpuinfo: &str) -> Option<String> {
    for line in cpuinfo.lines() {
        if line.contains("model name") || line.contains("Model") {
            if let Some((_, value)) = line.split_once(':') {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const X86_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: AuthenticAMD
cpu family\t: 25
model\t\t: 97
model name\t: AMD Ryzen 9 7900X 12-Core Processor
stepping\t: 2

processor\t: 1
model name\t: AMD Ryzen 9 7900X 12-Core Processor
";

    const ARM_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32

Hardware\t: BCM2835
Model\t\t: Raspberry Pi 4 Model B Rev 1.4
";

    #[test]
    fn x86_model_name_line_wins() {
        assert_eq!(
            scan_model_name(X86_CPUINFO).as_deref(),
            Some("AMD Ryzen 9 7900X 12-Core Processor")
        );
    }

    #[test]
    fn arm_model_line_is_recognized() {
        assert_eq!(
            scan_model_name(ARM_CPUINFO).as_deref(),
            Some("Raspberry Pi 4 Model B Rev 1.4")
        );
    }

    #[test]
    fn no_model_line_yields_none() {
        assert_eq!(scan_model_name("processor\t: 0\nflags\t: fpu vme\n"), None);
    }

    #[test]
    fn empty_value_after_colon_is_skipped() {
        assert_eq!(scan_model_name("model name\t:   \n"), None);
    }

    #[test]
    fn resolve_model_is_never_empty() {
        let sys = System::new_all();
        assert!(!resolve_model(&sys).is_empty());
    }
}
