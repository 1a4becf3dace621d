use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::Parser;

use carnet_core::repositories::AddressRepo as _;
use carnet_db_sheets::SheetsAddressRepo;
use carnet_gateways::GeocoderChain;

mod cfg;

use cfg::Cfg;

#[derive(Debug, Parser)]
#[command(name = "carnet", about = "Address notebook with a map of France", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    bind: IpAddr,
    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let cfg = Cfg::from_env()?;

    let repo = SheetsAddressRepo::new(
        carnet_db_sheets::DEFAULT_BASE_URL,
        &cfg.sheet_id,
        &cfg.sheets_token,
        &cfg.sheet_name,
        cfg.sheet_gid,
    )?;
    // Connectivity and credentials check; a store we cannot open is fatal.
    repo.ensure_header()
        .context("failed to open the address sheet")?;
    log::info!("connected to sheet {}", cfg.sheet_id);

    let geocoder = GeocoderChain::france_default(cfg.ban_url.as_deref(), cfg.photon_url.as_deref())?;

    let web_cfg = carnet_webserver::Cfg {
        gate_password: cfg.gate_password.clone(),
        batch_delay: cfg.batch_delay,
    };
    if web_cfg.gate_password.is_none() {
        log::warn!("CARNET_GATE_PASSWORD is not set, the password gate is disabled");
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(carnet_webserver::run(
            Box::new(repo),
            Box::new(geocoder),
            web_cfg,
            args.bind,
            args.port,
        ));
    Ok(())
}
