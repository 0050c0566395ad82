use std::sync::Arc;

use anyhow::Result;

use crate::api_client::{ApiClient, ReqwestTransport, Transport};
use crate::config::Config;
use crate::session::{FileStorage, SessionStore};

/// Shared client state handed to every view.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppState {
    /// Wires the file-backed session store and the HTTP transport from `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let session = SessionStore::new(Arc::new(FileStorage::new(&config.session_file)));
        let transport = ReqwestTransport::new(config.http_timeout)?;
        Ok(Self::with_transport(config, session, Arc::new(transport)))
    }

    pub fn with_transport(
        config: Config,
        session: SessionStore,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), transport, session.clone());
        Self {
            config,
            session,
            api,
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::AppState;
    use crate::api_client::mock::MockTransport;
    use crate::config::{Config, DEFAULT_API_BASE_URL};
    use crate::models::{AuthUser, Session};
    use crate::session::SessionStore;

    pub fn test_config() -> Config {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: PathBuf::from("unused-session.json"),
            http_timeout: None,
            rust_log: "warn".to_string(),
        }
    }

    pub fn test_session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: AuthUser {
                id: 7,
                email: "asha@acme.test".to_string(),
                full_name: "Asha Rao".to_string(),
            },
        }
    }

    /// Signed-out state over an in-memory store and a scripted transport.
    pub fn test_state(transport: Arc<MockTransport>) -> AppState {
        AppState::with_transport(test_config(), SessionStore::in_memory(), transport)
    }

    pub fn signed_in_state(transport: Arc<MockTransport>) -> AppState {
        let state = test_state(transport);
        state.session.save(&test_session("tok-abc")).unwrap();
        state
    }
}
