//! Schema versioning and compatibility.

/// Current schema version for all JSON outputs.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (field removals, type changes)
/// - MINOR: Additive changes (new optional fields)
/// - PATCH: Bug fixes, documentation
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Check if a schema version is compatible with `current`.
///
/// Versions are compatible when their major components match.
pub fn is_compatible_with(current: &str, version: &str) -> bool {
    let major = |v: &str| v.split('.').next().and_then(|s| s.parse::<u32>().ok());
    match (major(current), major(version)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Check if a schema version is compatible with [`SCHEMA_VERSION`].
pub fn is_compatible(version: &str) -> bool {
    is_compatible_with(SCHEMA_VERSION, version)
}
