use crate::{
    conf::ClientConf,
    model::{Labels, QuoteError},
};
use reqwest::{Client, Request};
use std::{fs::OpenOptions, io::Write, path::PathBuf, time::Duration};
use tracing::debug;

/// Asks the quote server for one bid and appends it to a local history file.
pub struct QuoteClient {
    http: Client,
    server_url: String,
    labels: Labels,
    output: PathBuf,
}

impl QuoteClient {
    pub fn new(conf: &ClientConf) -> Result<QuoteClient, QuoteError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(conf.timeout_ms))
            .build()
            .map_err(QuoteError::Request)?;

        Ok(QuoteClient {
            http,
            server_url: conf.server_url.clone(),
            labels: conf.labels(),
            output: conf.output.clone(),
        })
    }

    /// Without a pair no query is sent and the server picks its default.
    pub fn request(&self, pair: Option<&str>) -> Result<Request, QuoteError> {
        let mut req = self.http.get(&self.server_url);
        if let Some(pair) = pair {
            req = req.query(&[("pair", pair)]);
        }
        req.build().map_err(QuoteError::Request)
    }

    pub async fn fetch(&self, pair: Option<&str>) -> Result<String, QuoteError> {
        let req = self.request(pair)?;
        debug!(url = %req.url(), "Requesting quote");

        let res = self
            .http
            .execute(req)
            .await
            .map_err(QuoteError::from_transport)?;
        let status = res.status();
        let body = res.text().await.map_err(QuoteError::from_body)?;

        if !status.is_success() {
            return Err(QuoteError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Appends `"<Label>: <bid>\n"` to the output file and returns the line.
    pub fn record(&self, pair: Option<&str>, bid: &str) -> Result<String, QuoteError> {
        let line = format!("{}: {}\n", self.labels.label(pair), bid);

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.output)?;
        file.write_all(line.as_bytes())?;

        Ok(line)
    }

    /// Fetches and records a quote. Nothing is written unless the fetch succeeds.
    pub async fn run(&self, pair: Option<&str>) -> Result<String, QuoteError> {
        let bid = self.fetch(pair).await?;
        self.record(pair, &bid)
    }
}
