//! Local HTTP server

use taskgate::config::Config;
use tiny_http::Server;

use crate::server;

/// Serve the API on the configured address, with optional overrides
pub fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = config.server.address();
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    let dispatcher = config.dispatcher();

    log::info!("Listening on http://{addr} ({:?} store)", config.store.backend);
    println!("Serving task API on http://{addr}");
    println!("Press Ctrl+C to stop");

    server::tiny_http::run(&server, &dispatcher);
    Ok(())
}
