//! Program name and version, as reported by the `dms` binary and the WebAssembly bindings.

/// Program name. Can be overridden at build time through the `PROGRAM_NAME` environment variable.
pub const NAME: &str = match option_env!("PROGRAM_NAME") {
    Some(s) => s,
    None => "dms",
};

/// Crate version, or `"unknown"` when built without cargo.
pub const VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
    Some(s) => s,
    None => "unknown",
};

/// `"<name> <version>"`
pub fn long_version() -> String {
    format!("{} {}", NAME, VERSION)
}
