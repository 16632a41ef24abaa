//! Orchestration: token, then user ids, then JSON on the output stream.

use std::io::Write;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{error, info};

use crate::config::settings::ClientConfig;
use crate::error::FetchError;
use crate::sources::{fetch_auth_token, fetch_user_ids};
use crate::utils::constants::{EXIT_FAILURE, EXIT_SUCCESS};

pub async fn fetch_noc_list(client: &Client, config: &ClientConfig) -> Result<Vec<String>, FetchError> {
    let token = fetch_auth_token(client, config).await?;
    fetch_user_ids(client, config, &token).await
}

pub fn render_output(ids: &[String]) -> Result<String> {
    serde_json::to_string(ids).context("failed to encode user ids as JSON")
}

/// Run the whole flow and return the process exit code. `out` is written
/// exactly once, and only on success.
pub async fn execute<W: Write>(client: &Client, config: &ClientConfig, out: &mut W) -> u8 {
    let result = match fetch_noc_list(client, config).await {
        Ok(ids) => write_output(&ids, out),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{}. Exiting.", e);
            EXIT_FAILURE
        }
    }
}

fn write_output<W: Write>(ids: &[String], out: &mut W) -> Result<()> {
    let json = render_output(ids)?;
    writeln!(out, "{}", json).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    info!("printed {} user ids", ids.len());
    Ok(())
}
