//! Health command implementation.

use crate::output;
use anyhow::{Result, bail};
use investezy_api::ApiClient;

/// Check the dashboard API responds and reports itself healthy.
pub(crate) async fn check_health(client: &ApiClient, json: bool) -> Result<()> {
    let health = client.health().await?;

    if json {
        output::print_json(&health)?;
    } else {
        println!("API:      {}", client.config().base_url);
        println!("Status:   {}", health.status);
        println!("Version:  {}", health.version);
        println!("Checked:  {}", health.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }

    if !health.is_healthy() {
        bail!("API reported status '{}'", health.status);
    }

    Ok(())
}
