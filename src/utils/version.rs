/// Returns the CLI version:
/// 1. ADDONBUMP_CLI_VERSION env var
/// 2. compile-time CARGO_PKG_VERSION
pub fn get_version() -> String {
    if let Ok(v) = std::env::var("ADDONBUMP_CLI_VERSION") {
        if !v.trim().is_empty() {
            return v;
        }
    }

    option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0").to_string()
}
