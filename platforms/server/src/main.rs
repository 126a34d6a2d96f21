//! turl server - runs a Turing machine one step per HTTP request.
//!
//! The whole machine rides in the request path; a 302 redirect carries the
//! successor configuration, so a redirect-following client runs the machine
//! to completion with no state held here.

mod routes;

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "turl-server")]
#[command(about = "Turing machine over HTTP, one step per request")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("turl_server=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let app = routes::router();

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
