//! Command execution context
//!
//! Loads the config, picks the credential store and wires the portal client
//! and redirect policy onto it.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AuthenticatedClient, PortalClient, ReqwestTransport};
use crate::config::Config;
use crate::error::Result;
use crate::output::progress::with_spinner;
use crate::session::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, RedirectPolicy, Session,
    TerminalNavigator,
};

/// Context for command execution.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Resolved config file path
    pub config_path: PathBuf,
    /// Where the session token lives for this run
    pub store: Arc<dyn CredentialStore>,
    /// Session accessor over `store`
    pub session: Session,
    /// Portal API client
    pub client: PortalClient,
    /// Output format preference
    pub format: OutputFormat,
    navigator: Arc<TerminalNavigator>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The token comes from `--token` when given, otherwise from the
    /// `authToken` file next to the config file.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        Self::with_navigator(opts, Arc::new(TerminalNavigator::new()))
    }

    fn with_navigator(opts: &GlobalOptions, navigator: Arc<TerminalNavigator>) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(&config_path)?;

        let store: Arc<dyn CredentialStore> = match opts.token_ref() {
            Some(token) => {
                debug!("Using token from --token for this run");
                Arc::new(MemoryCredentialStore::with_token(token))
            }
            None => Arc::new(FileCredentialStore::new(Config::data_dir(&config_path))),
        };

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default();

        let base_url = config.api_base_url(opts.api_host_ref());
        debug!("Using API base URL {}", base_url);

        let session = Session::new(store.clone());
        let policy = RedirectPolicy::new(store.clone(), navigator.clone());
        let transport = Arc::new(ReqwestTransport::new()?);
        let client = PortalClient::new(AuthenticatedClient::new(
            transport,
            session.clone(),
            base_url,
        ))
        .with_redirect(policy);

        Ok(Self {
            config,
            config_path,
            store,
            session,
            client,
            format,
            navigator,
        })
    }

    /// Run a portal call behind a spinner, then show any login prompt it raised
    pub async fn call<T, F>(&self, message: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let result = with_spinner(message, fut).await;
        self.navigator.flush();
        result
    }

    /// Persist the config back to where it was loaded from
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }
}
