use crate::{conf::ServerConf, model::ApiError, service::QuoteService};
use rocket::{get, State};

#[get("/quote?<pair>")]
pub async fn get(
    pair: Option<&str>,
    service: &State<QuoteService>,
    conf: &State<ServerConf>,
) -> Result<String, ApiError> {
    let pair = pair
        .filter(|it| !it.is_empty())
        .unwrap_or(conf.default_pair.as_str());

    service
        .get(pair)
        .await
        .map(|quote| quote.bid)
        .map_err(|e| ApiError::new(e, conf.expose_errors))
}
