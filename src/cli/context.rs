//! Command execution context
//!
//! Loads config and session once and builds the API client and render target
//! every command shares.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::TaskClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::storage::FileStore;
use crate::view::{HtmlPage, TaskView, TerminalNavigator, TerminalView};

/// Context for command execution: config, session, client and output options.
pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub session_path: PathBuf,
    pub client: TaskClient,
    pub format: OutputFormat,
    pub assume_yes: bool,
}

impl CommandContext {
    /// Load config and session and build the client.
    ///
    /// The output format is the flag if given, else the config preference,
    /// else pretty. An unknown format name in the config file is ignored.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(config_path.clone())?;

        let store = FileStore::open_at(opts.session_ref())?;
        let session_path = store.path().to_path_buf();
        let session = Session::new(Arc::new(store));

        let base_url = config.api_base_url(opts.api_host_ref());
        log::debug!("Using API host {}", base_url);
        let client = TaskClient::new(&base_url, session, Arc::new(TerminalNavigator))?;

        let format = opts
            .format
            .or_else(|| {
                let name = config.preferences.format.as_deref()?;
                let parsed = OutputFormat::from_name(name);
                if parsed.is_none() {
                    log::warn!("Ignoring unknown format '{}' in config", name);
                }
                parsed
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            config_path,
            session_path,
            client,
            format,
            assume_yes: opts.yes,
        })
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    /// Fail unless a session token is stored
    pub fn require_login(&self) -> Result<()> {
        match self.session().token() {
            Some(_) => Ok(()),
            None => Err(Error::NotLoggedIn),
        }
    }

    /// Render target for the selected format
    pub fn view(&self) -> CommandView {
        match self.format {
            OutputFormat::Html => {
                let timeout = Duration::from_secs(self.config.preferences.message_timeout_secs);
                CommandView::Html(
                    HtmlPage::tasks_page()
                        .with_message_timeout(timeout)
                        .with_confirm_reply(self.assume_yes),
                )
            }
            format => CommandView::Terminal(TerminalView::new(format, self.assume_yes)),
        }
    }
}

/// The render target a command writes into
pub enum CommandView {
    Terminal(TerminalView),
    Html(HtmlPage),
}

impl CommandView {
    pub fn as_view(&mut self) -> &mut dyn TaskView {
        match self {
            CommandView::Terminal(view) => view as &mut dyn TaskView,
            CommandView::Html(page) => page,
        }
    }

    /// Flush buffered output; an HTML page is printed whole.
    pub fn finish(self) {
        match self {
            CommandView::Terminal(mut view) => view.finish(),
            CommandView::Html(mut page) => {
                page.prune_messages(Instant::now());
                print!("{}", page.to_html());
            }
        }
    }
}
