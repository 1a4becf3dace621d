use std::{env, time::Duration};

use anyhow::{bail, Result};

const DEFAULT_SHEET_NAME: &str = "Feuille 1";
const DEFAULT_BATCH_DELAY_SECS: u64 = 1;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub sheet_id: String,
    pub sheet_name: String,
    pub sheet_gid: i64,
    pub sheets_token: String,
    /// Shared password for the web gate; unset disables the gate.
    pub gate_password: Option<String>,
    pub ban_url: Option<String>,
    pub photon_url: Option<String>,
    pub batch_delay: Duration,
}

impl Cfg {
    pub fn from_env() -> Result<Self> {
        let Ok(sheet_id) = env::var("CARNET_SHEET_ID") else {
            bail!("CARNET_SHEET_ID is not set");
        };
        let Ok(sheets_token) = env::var("CARNET_SHEETS_TOKEN") else {
            bail!("CARNET_SHEETS_TOKEN is not set");
        };
        let sheet_name =
            env::var("CARNET_SHEET_NAME").unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string());
        let sheet_gid = match env::var("CARNET_SHEET_GID") {
            Ok(gid) => gid.parse()?,
            Err(_) => 0,
        };
        let batch_delay_secs = match env::var("CARNET_BATCH_DELAY_SECS") {
            Ok(secs) => secs.parse()?,
            Err(_) => DEFAULT_BATCH_DELAY_SECS,
        };
        Ok(Self {
            sheet_id,
            sheet_name,
            sheet_gid,
            sheets_token,
            gate_password: env::var("CARNET_GATE_PASSWORD").ok().filter(|p| !p.is_empty()),
            ban_url: env::var("CARNET_BAN_URL").ok(),
            photon_url: env::var("CARNET_PHOTON_URL").ok(),
            batch_delay: Duration::from_secs(batch_delay_secs),
        })
    }
}
