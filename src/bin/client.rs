use anyhow::Result;
use clap::Parser;
use fxquote::{client::QuoteClient, conf::Conf};
use std::{path::PathBuf, process::exit};
use tracing::error;

/// Fetch a quote from the quote server and append it to a local file.
#[derive(Parser)]
#[command(name = "client", version)]
struct Args {
    /// Currency pair, e.g. EUR-BRL. The server default applies when omitted.
    pair: Option<String>,

    /// Quote endpoint to call instead of the configured one.
    #[arg(long)]
    server_url: Option<String>,

    /// File to append the quote to instead of the configured one.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!(%e, "Unable to record quote");
        exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut conf = Conf::new()?.client;
    if let Some(server_url) = args.server_url {
        conf.server_url = server_url;
    }
    if let Some(output) = args.output {
        conf.output = output;
    }

    let client = QuoteClient::new(&conf)?;
    let line = client.run(args.pair.as_deref()).await?;
    print!("{}", line);
    Ok(())
}
