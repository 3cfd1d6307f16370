//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - colored, human-oriented
    #[default]
    Pretty,
    /// Table format - one row per task
    Table,
    /// JSON format - structured for scripts
    Json,
    /// HTML format - the rendered task page
    Html,
}

impl OutputFormat {
    /// Parse a format name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}
