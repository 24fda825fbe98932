//! Version string shown by `--version` and logged at startup.

/// Git commit the binary was built from, or `unknown` outside a checkout.
#[must_use]
pub fn git_hash() -> &'static str {
    option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
}

/// Returns `pkg_version (git_hash)`.
#[must_use]
pub fn build_version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), git_hash())
}
