use std::result::Result as StdResult;

use gavel_models::{ApiError, ApiResponse};

macro_rules! ep {
    ($self:ident, $ep:literal $($args:tt)*) => {
        format!(concat!("{}", $ep), $self.base, $($args)*)
    };
}

pub mod bot_settings;
pub mod query;
pub mod transport;

pub use bot_settings::{
    GetMyDefaultAdministratorRightsOptions, SetMyDefaultAdministratorRightsOptions,
};
pub use transport::Transport;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("decoding: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("query encoding: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("{0}")]
    Api(#[from] ApiError),
}

pub type Result<T = ()> = StdResult<T, HttpError>;

/// Root of the public Bot API server.
pub const API_ROOT_URL: &str = "https://api.telegram.org";

/// Bot API client.
///
/// Holds the bot token and the API root; every method builds its endpoint
/// from them. Any [`Transport`] can carry the requests, `reqwest::Client` is
/// the default.
pub struct Http<T = reqwest::Client> {
    base: String,
    transport: T,
}

impl Http {
    pub fn new(token: &str) -> Self {
        Self::new_with_url(token, API_ROOT_URL)
    }

    /// Use a self-hosted Bot API server instead of [`API_ROOT_URL`].
    pub fn new_with_url(token: &str, api_root: &str) -> Self {
        Self::with_transport(token, api_root, reqwest::Client::new())
    }
}

impl<T: Transport> Http<T> {
    pub fn with_transport(token: &str, api_root: &str, transport: T) -> Self {
        Self {
            base: format!("{}/bot{}", api_root.trim_end_matches('/'), token),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GETs `url`, decodes the envelope and checks it.
    pub(crate) async fn get_checked<R>(
        &self,
        method: &'static str,
        url: &str,
    ) -> Result<ApiResponse<R>>
    where
        R: serde::de::DeserializeOwned,
    {
        tracing::debug!(method, "sending request");

        let body = self.transport.get(url).await?;
        let res: ApiResponse<R> = serde_json::from_slice(&body)?;

        if let Err(e) = res.check() {
            tracing::warn!(method, code = e.code, description = %e.description, "request rejected");
            return Err(e.into());
        }

        Ok(res)
    }
}

// the url carries the token, keep it out of debug output
impl<T> std::fmt::Debug for Http<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http").finish_non_exhaustive()
    }
}

mod impl_prelude {
    pub(crate) use super::{Http, Result, Transport};
}
