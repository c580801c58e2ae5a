use std::sync::OnceLock;

/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("SUPERPY_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("SUPERPY_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("SUPERPY_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("SUPERPY_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("SUPERPY_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

static LONG_VERSION: OnceLock<String> = OnceLock::new();

/// Multi-line version text shown by `--version`.
pub fn long_version() -> &'static str {
    LONG_VERSION.get_or_init(|| {
        let meta = current();
        format!(
            "{}\ncommit: {} ({})\nbuilt: {}\ntarget: {} [{}]",
            meta.version, meta.git_hash, meta.git_status, meta.timestamp, meta.target, meta.profile
        )
    })
}
