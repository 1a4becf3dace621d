use std::{net::IpAddr, time::Duration};

use rocket::{Build, Rocket, Route};

use carnet_core::prelude::*;

mod error;
mod frontend;
mod guards;

#[cfg(test)]
mod mockdb;
#[cfg(test)]
pub mod tests;

/// Web-facing configuration.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Shared password for the session gate. `None` disables the gate.
    pub gate_password: Option<String>,
    /// Pause between batch-import items; the geocoding providers are
    /// rate-sensitive.
    pub batch_delay: Duration,
}

pub(crate) struct Repo(pub Box<dyn AddressRepo + Send + Sync>);

pub(crate) struct GeoCoding(pub Box<dyn GeoCodingGateway + Send + Sync>);

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub(crate) fn rocket_instance(
    rocket_cfg: Option<rocket::figment::Figment>,
    repo: Box<dyn AddressRepo + Send + Sync>,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    cfg: Cfg,
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> Rocket<Build> {
    let r = match rocket_cfg {
        Some(figment) => rocket::custom(figment),
        None => rocket::build(),
    };
    let mut instance = r
        .manage(Repo(repo))
        .manage(GeoCoding(geocoding))
        .manage(cfg);
    for (base, routes) in mounts {
        instance = instance.mount(base, routes);
    }
    instance
}

pub async fn run(
    repo: Box<dyn AddressRepo + Send + Sync>,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    cfg: Cfg,
    address: IpAddr,
    port: u16,
) {
    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port));
    let instance = rocket_instance(Some(figment), repo, geocoding, cfg, mounts());
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
