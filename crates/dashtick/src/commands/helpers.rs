use dashtick_core::DashtickConfig;
use tracing::warn;

/// Load the config hierarchy, falling back to defaults on error.
///
/// Errors are printed to stderr as a warning plus a tip.
pub fn load_config_with_warning() -> DashtickConfig {
    match DashtickConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config.load_failed", error = %e);
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            eprintln!(
                "Tip: Check ~/.dashtick/config.toml and ./.dashtick/config.toml for errors."
            );
            DashtickConfig::default()
        }
    }
}
