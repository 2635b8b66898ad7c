// Scorpion control API HTTP client
//
// Wraps `reqwest::Client` with V-API URL construction and record parsing.
// The device speaks plain JSON: a single record on reads, one record per
// key on batched writes.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::model::{ParamMap, Record};
use crate::transport::TransportConfig;

/// HTTP client for one Scorpion frame.
///
/// Cheaply cloneable -- `reqwest::Client` is an `Arc` internally, so
/// clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ScorpionClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ScorpionClient {
    /// Connect to the device at `host:port`.
    ///
    /// Issues a probe request against the device root: any HTTP answer,
    /// whatever its status, proves a device is listening, while a
    /// transport failure means there is no Scorpion at this address.
    /// Whether the control API itself is enabled is only discovered on
    /// the first parameter read.
    pub async fn connect(
        host: &str,
        port: u16,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{host}:{port}/"))?;
        let http = transport.build_client()?;
        let client = Self { http, base_url };
        client.probe().await?;
        Ok(client)
    }

    /// Create a client from a pre-built `reqwest::Client` and base URL.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn probe(&self) -> Result<(), Error> {
        debug!(url = %self.base_url, "probing device");
        self.http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;
        Ok(())
    }

    /// Build a full URL for a V-API path: `{base}/v.api/apis/EV/{path}`.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/v.api/apis/EV/{path}"))?)
    }

    /// Read a single parameter.
    ///
    /// `GET /v.api/apis/EV/GET/parameter/{key}`
    pub async fn get(&self, key: &str) -> Result<Record, Error> {
        let url = self.api_url(&format!("GET/parameter/{key}"))?;
        debug!(key, "GET parameter");
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        parse_body(resp).await
    }

    /// Write a batch of parameters in a single call.
    ///
    /// `POST /v.api/apis/EV/SET/parameter` with a JSON object body
    /// mapping keys to values. The device answers with one record per
    /// key, in request order.
    pub async fn post(&self, query: &ParamMap) -> Result<Vec<Record>, Error> {
        let url = self.api_url("SET/parameter")?;
        debug!(keys = query.len(), "POST parameters");
        let resp = self
            .http
            .post(url)
            .json(query)
            .send()
            .await
            .map_err(Error::Transport)?;
        parse_body(resp).await
    }
}

/// Check the HTTP status and decode the JSON body.
async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            message: body[..body.len().min(200)].to_owned(),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;
    serde_json::from_str(&body).map_err(|e| {
        let preview = &body[..body.len().min(200)];
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })
}
