use anyhow::Result;
use fxquote::{conf::Conf, db, prepare, provider::AwesomeApi, service::QuoteService};
use rocket::{Build, Rocket};
use std::{process::exit, time::Duration};
use tracing::{error, info};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::fmt::init();

    let rocket = setup().unwrap_or_else(|e| {
        error!(%e, "Unable to start server");
        exit(1);
    });

    let _rocket = rocket.launch().await?;
    Ok(())
}

fn setup() -> Result<Rocket<Build>> {
    let conf = Conf::new()?;
    let server = conf.server;

    db::create_if_missing(&server.db_path)?;
    let pool = db::pool(&server.db_path)?;
    let provider = AwesomeApi::new(conf.upstream)?;
    let service = QuoteService::new(
        Box::new(provider),
        pool,
        Duration::from_millis(server.db_timeout_ms),
    );

    info!(port = server.port, default_pair = %server.default_pair, "Server started");
    let figment = rocket::Config::figment().merge(("port", server.port));
    Ok(prepare(rocket::custom(figment), service, server))
}
