//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global flags, captured once after parsing.
///
/// Precedence is CLI flag, then environment variable, then config file,
/// then default. This struct holds the first two layers; the config file is
/// consulted in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.taskop/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.taskop/session.yaml)
    pub session: Option<String>,

    /// API host override
    pub api_host: Option<String>,

    /// Answer yes to confirmation prompts
    pub yes: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            session: cli.session.clone(),
            api_host: cli.api_host.clone(),
            yes: cli.yes,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/config.yaml".to_string()),
            session: Some("/custom/session.yaml".to_string()),
            api_host: Some("http://localhost:8080".to_string()),
            yes: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.session_ref(), Some("/custom/session.yaml"));
        assert_eq!(opts.api_host_ref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.session_ref(), None);
        assert_eq!(opts.api_host_ref(), None);
        assert!(!opts.yes);
    }
}
