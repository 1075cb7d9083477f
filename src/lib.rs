pub mod client;
pub mod conf;
pub mod controller;
pub mod db;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

use conf::ServerConf;
use rocket::{routes, Build, Rocket};
use service::QuoteService;

/// Mounts the quote endpoint and its state on `rocket`.
pub fn prepare(rocket: Rocket<Build>, service: QuoteService, conf: ServerConf) -> Rocket<Build> {
    rocket
        .mount("/", routes![controller::quote::get])
        .manage(service)
        .manage(conf)
}
