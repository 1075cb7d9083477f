use crate::{
    conf::UpstreamConf,
    model::{Quote, QuoteError},
    provider::Provider,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};
use tracing::{debug, warn};

/// AwesomeAPI `json/last` endpoint.
pub struct AwesomeApi {
    conf: UpstreamConf,
    client: Client,
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
}

impl AwesomeApi {
    pub fn new(conf: UpstreamConf) -> Result<AwesomeApi, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(conf.timeout_ms))
            .build()
            .map_err(QuoteError::Request)?;

        Ok(AwesomeApi { conf, client })
    }
}

#[rocket::async_trait]
impl Provider for AwesomeApi {
    fn name(&self) -> String {
        "awesomeapi".into()
    }

    async fn fetch(&self, pair: &str) -> Result<Quote, QuoteError> {
        let url = format!("{}{}", self.conf.url, pair);
        let req = self
            .client
            .get(&url)
            .build()
            .map_err(QuoteError::Request)?;

        debug!(provider = %self.name(), %url, "Fetching quote");
        let res = self
            .client
            .execute(req)
            .await
            .map_err(QuoteError::from_transport)?;

        let status = res.status();
        let body = res.bytes().await.map_err(QuoteError::from_body)?;

        if !status.is_success() {
            warn!(provider = %self.name(), %status, "Upstream rejected quote request");
        }

        decode(status, &body)
    }
}

/// Turns an upstream response into the single quote it should carry.
pub fn decode(status: StatusCode, body: &[u8]) -> Result<Quote, QuoteError> {
    if !status.is_success() {
        let payload: ErrorPayload =
            serde_json::from_slice(body).map_err(QuoteError::UpstreamPayload)?;
        return Err(QuoteError::Upstream(payload.message));
    }

    let quotes: HashMap<String, Quote> =
        serde_json::from_slice(body).map_err(QuoteError::Decode)?;

    if quotes.len() != 1 {
        return Err(QuoteError::UnexpectedQuoteCount(quotes.len()));
    }

    quotes
        .into_iter()
        .next()
        .map(|(_, quote)| quote)
        .ok_or(QuoteError::UnexpectedQuoteCount(0))
}
