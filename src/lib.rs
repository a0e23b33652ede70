pub mod api;
pub mod apis;
pub mod config;
pub mod driver;
pub mod enumerate;
pub mod error;
pub mod models;
pub mod selector;
pub mod uploader;

#[cfg(test)]
pub(crate) mod testing;

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

use crate::error::VimeoError;
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::{fmt, time::Duration};

pub use reqwest;

pub const API_PREFIX: &'static str = "https://api.vimeo.com";

static DEFAULT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.vimeo.*+json;version=3.4"),
    );
    headers
});

/// Static credentials, any of which may be absent. Requests made without
/// usable credentials are rejected by the server, not here.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

pub struct Vimeo {
    client: reqwest::Client,
    prefix: String,
    credentials: Credentials,
}

impl Vimeo {
    pub fn new(
        prefix: &str,
        credentials: Credentials,
        timeout_seconds: u64,
    ) -> Result<Self, VimeoError> {
        Ok(Self {
            client: Self::make_client(timeout_seconds)?,
            prefix: prefix.trim_end_matches('/').to_owned(),
            credentials,
        })
    }

    /// Resource paths from the API come both with and without a leading
    /// slash; absolute urls pass through.
    fn make_path(&self, postfix: &str) -> String {
        if postfix.starts_with("http://") || postfix.starts_with("https://") {
            postfix.to_owned()
        } else {
            format!("{}/{}", self.prefix, postfix.trim_start_matches('/'))
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, path)
            .headers(DEFAULT_HEADERS.clone());
        let credentials = &self.credentials;
        match (
            &credentials.access_token,
            &credentials.client_id,
            &credentials.client_secret,
        ) {
            (Some(token), _, _) => builder.bearer_auth(token),
            (None, Some(id), secret) => builder.basic_auth(id, secret.as_ref()),
            _ => builder,
        }
    }

    pub fn make_client(timeout_seconds: u64) -> Result<reqwest::Client, VimeoError> {
        reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| e.into())
    }
}

pub(crate) async fn execute(
    request: reqwest::RequestBuilder,
    log_params: LogParams,
) -> Result<serde_json::Value, VimeoError> {
    debug!("{}", log_params);
    let response = request.send().await?;
    let status = response.status().as_u16();
    let text = response.text().await?;
    let json = parse_body(&text);
    let mut log_params = log_params;
    log_params.status = Some(status);
    log_params.result = Some(json.clone());
    debug!("{}", log_params);
    check_response(status, json)
}

fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
    }
}

pub(crate) fn check_response(
    status: u16,
    json: serde_json::Value,
) -> Result<serde_json::Value, VimeoError> {
    match status {
        200..=299 => Ok(json),
        401 | 403 => Err(VimeoError::Unauthorized(status, json)),
        _ => Err(VimeoError::Vimeo(status, json)),
    }
}

#[derive(Clone, Debug)]
pub struct LogParams {
    pub method: String,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub status: Option<u16>,
    pub result: Option<serde_json::Value>,
}

impl LogParams {
    fn new(method: &str, path: &str, params: &[(&str, &str)]) -> Self {
        Self {
            method: method.to_owned(),
            path: path.to_owned(),
            params: params
                .iter()
                .map(|&(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
            status: None,
            result: None,
        }
    }
}

impl fmt::Display for LogParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.method, self.path, self.params)?;
        if let Some(status) = self.status {
            write!(f, " -> {}", status)?;
        }
        if let Some(result) = &self.result {
            write!(f, " {}", result)?;
        }
        Ok(())
    }
}
