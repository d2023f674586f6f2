use std::path::{Path, PathBuf};

/// Resolved default file locations for agora-tui.
/// Pure data structure with no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory holding the data set and the log
    /// Example: ~/.local/share/agora-tui/
    pub data_dir: PathBuf,

    /// Catalog, reviews and directory JSON read at startup
    /// Example: ~/.local/share/agora-tui/dataset.json
    pub dataset: PathBuf,

    /// Tracing output (the terminal belongs to the UI)
    /// Example: ~/.local/share/agora-tui/agora-tui.log
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolves all paths under the given home directory.
    ///
    /// Does NOT create directories or verify file existence; that is the
    /// caller's responsibility.
    ///
    /// ```
    /// use std::path::Path;
    /// use agora_tui::paths::Paths;
    ///
    /// let paths = Paths::resolve(Path::new("/home/mila"));
    /// assert_eq!(
    ///     paths.dataset,
    ///     Path::new("/home/mila/.local/share/agora-tui/dataset.json")
    /// );
    /// ```
    pub fn resolve(home: &Path) -> Self {
        let data_dir = home.join(".local").join("share").join("agora-tui");
        Self {
            dataset: data_dir.join("dataset.json"),
            log_file: data_dir.join("agora-tui.log"),
            data_dir,
        }
    }

    /// Resolve from `$HOME`, falling back to `/tmp` when unset.
    pub fn from_env() -> Self {
        let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("/tmp"), PathBuf::from);
        Self::resolve(&home)
    }
}
