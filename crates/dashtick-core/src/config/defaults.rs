//! Default values for configuration.

use std::path::PathBuf;

/// Directory name used under the home directory and the project directory.
pub const CONFIG_DIR_NAME: &str = ".dashtick";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Access mode when nothing is configured.
pub const DEFAULT_READONLY: bool = true;

/// Path of the user config file, `None` when the home directory is unknown.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Path of the project config file relative to `project_dir`.
pub fn project_config_path(project_dir: &std::path::Path) -> PathBuf {
    project_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            project_config_path(Path::new("/work/app")),
            PathBuf::from("/work/app/.dashtick/config.toml")
        );
    }

    #[test]
    fn test_user_config_path_ends_with_config_file() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with(".dashtick/config.toml"));
        }
    }
}
