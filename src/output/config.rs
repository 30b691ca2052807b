//! Output configuration types

const DEFAULT_FOLDER_LIMIT: usize = 5;
const DEFAULT_TOP_TYPES: usize = 5;
const DEFAULT_NODE_TYPES: usize = 3;

/// How much of a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One block per directory followed by the summary.
    #[default]
    Detailed,
    /// Only the whole-tree summary.
    Summary,
    /// Nothing on stdout.
    Quiet,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub verbosity: Verbosity,
    /// Print subfolder names under each directory.
    pub show_folders: bool,
    /// Maximum subfolder names shown per directory. `None` shows all of
    /// them, ten per line.
    pub folder_limit: Option<usize>,
    /// File types listed in the summary before the "other" bucket.
    pub top_types: usize,
    /// File types listed per directory in detailed mode.
    pub node_types: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            verbosity: Verbosity::Detailed,
            show_folders: true,
            folder_limit: Some(DEFAULT_FOLDER_LIMIT),
            top_types: DEFAULT_TOP_TYPES,
            node_types: DEFAULT_NODE_TYPES,
        }
    }
}

impl OutputConfig {
    /// Plain config for tests and piped output.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Default::default()
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}
