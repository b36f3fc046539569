/// Checks the probe window for a NUL byte.
/// A single NUL is conclusive evidence of binary content.
pub fn has_nul(window: &[u8]) -> bool {
    memchr::memchr(0, window).is_some()
}

/// Counts C0 control bytes, ignoring tab, LF and CR.
pub fn control_count(window: &[u8]) -> usize {
    window
        .iter()
        .filter(|&&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r'))
        .count()
}

/// Checks whether control characters make up more than a tenth of the window.
pub fn exceeds_control_density(window: &[u8]) -> bool {
    control_count(window) > window.len() / 10
}
