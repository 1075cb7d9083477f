use crate::model::{Quote, QuoteError};

/// Source of live quotes for a currency pair.
#[rocket::async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> String;

    async fn fetch(&self, pair: &str) -> Result<Quote, QuoteError>;
}
