//! Run a single gateway event through the dispatcher

use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::Context as _;
use taskgate::api::ApiRequest;
use taskgate::config::Config;

/// Read a gateway proxy event, dispatch it, print the proxy response
///
/// Succeeds whenever a response is produced, whatever its status code.
pub fn invoke(config: &Config, event: Option<&Path>) -> anyhow::Result<()> {
    let raw = match event {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read event {}", path.display()))?,
        _ => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).context("failed to read event from stdin")?;
            raw
        },
    };

    let request: ApiRequest = serde_json::from_str(&raw).context("invalid gateway event")?;
    let response = config.dispatcher().dispatch(&request);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
