use std::time::Duration;

use semver::Version;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::debug;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
const CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of the startup crates.io version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    /// A newer stable release exists; carries the newer version string.
    UpdateAvailable(String),
    UpToDate,
}

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(rename = "crate")]
    crate_data: RegistryCrate,
}

#[derive(Debug, Deserialize)]
struct RegistryCrate {
    max_stable_version: String,
}

async fn fetch_latest_stable() -> Option<Version> {
    let client = reqwest::Client::builder()
        .timeout(CHECK_TIMEOUT)
        .user_agent(format!("{CRATE_NAME}/{CRATE_VERSION}"))
        .build()
        .ok()?;

    let payload = client
        .get(format!("https://crates.io/api/v1/crates/{CRATE_NAME}"))
        .send()
        .await
        .ok()?
        .json::<RegistryResponse>()
        .await
        .ok()?;

    Version::parse(payload.crate_data.max_stable_version.as_str()).ok()
}

/// Compares the installed version against crates.io. Network or parse
/// failures yield `None`; the check is best-effort and never surfaces an
/// error to the user.
pub async fn check_for_update() -> Option<UpdateCheck> {
    let installed = Version::parse(CRATE_VERSION).ok()?;
    let latest = fetch_latest_stable().await?;
    debug!(%installed, %latest, "version check complete");

    if latest > installed {
        Some(UpdateCheck::UpdateAvailable(latest.to_string()))
    } else {
        Some(UpdateCheck::UpToDate)
    }
}

/// Runs the check in the background, delivering the result to the app event
/// loop. A dropped receiver just discards the result.
pub fn spawn_update_check(result_tx: mpsc::Sender<Option<UpdateCheck>>) {
    tokio::spawn(async move {
        let result = check_for_update().await;
        let _ = result_tx.send(result).await;
    });
}
