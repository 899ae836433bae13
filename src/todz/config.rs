use directories::ProjectDirs;
use std::path::PathBuf;

const DATA_FILE_ENV: &str = "TODZ_DATA_FILE";
const DATA_FILE_NAME: &str = "todos.json";

/// Where the todo document lives.
///
/// The path is resolved once here and handed to the store explicitly;
/// nothing below the CLI layer guesses a location. Resolution order:
///
/// 1. `TODZ_DATA_FILE` environment variable — full path to the document.
///    Primarily used by tests to isolate state in a temp directory.
/// 2. The OS-appropriate user data directory (via the `directories`
///    crate) + `todos.json`.
#[derive(Debug, Clone)]
pub struct TodzConfig {
    pub data_file: PathBuf,
}

impl TodzConfig {
    pub fn resolve() -> Self {
        let data_file = std::env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let proj_dirs = ProjectDirs::from("com", "todz", "todz")
                    .expect("Could not determine data dir");
                proj_dirs.data_dir().join(DATA_FILE_NAME)
            });
        Self { data_file }
    }

    /// Build a config pointing at an explicit document path.
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_taken_verbatim() {
        let config = TodzConfig::with_data_file(PathBuf::from("/tmp/elsewhere/todos.json"));
        assert_eq!(config.data_file, PathBuf::from("/tmp/elsewhere/todos.json"));
    }
}
