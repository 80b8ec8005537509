//! Shared knobs for the property tests.

/// Number of proptest cases to run.
///
/// `PROPTEST_CASES` in the environment overrides everything; CI runs the
/// suite at full strength; local runs are clamped down so `cargo test` stays
/// fast.
pub fn proptest_cases(default: u32) -> u32 {
    if let Some(value) = env_u32("PROPTEST_CASES") {
        return value.max(1);
    }
    if std::env::var_os("CI").is_some() {
        return default.max(1);
    }
    default.clamp(1, 8)
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}
