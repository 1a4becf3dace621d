use maud::Markup;
use rocket::{
    form::Form,
    get, post,
    request::FlashMessage,
    response::{
        content::{RawCss, RawJavaScript},
        Flash, Redirect,
    },
    routes, uri, FromForm, Route, State,
};

use carnet_core::usecases;

use super::{error::AppError, guards::*, Cfg, GeoCoding, Repo};

mod login;
mod view;

const MAP_JS: &str = include_str!("map.js");
const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, AppError>;

#[get("/")]
pub fn get_index(
    _session: Session,
    db: &State<Repo>,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Markup> {
    let records = usecases::list_addresses(db.inner().0.as_ref())?;
    Ok(view::manage(
        &records,
        flash.as_ref(),
        cfg.gate_password.is_some(),
    ))
}

#[get("/", rank = 2)]
pub fn get_index_gate() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[derive(FromForm)]
pub struct AddAddressAction<'r> {
    address: &'r str,
    note: &'r str,
}

#[post("/addresses", data = "<data>")]
pub fn post_add_address(
    _session: Session,
    db: &State<Repo>,
    geocoding: &State<GeoCoding>,
    data: Form<AddAddressAction<'_>>,
) -> Flash<Redirect> {
    let d = data.into_inner();
    let redirect = Redirect::to(uri!(get_index));
    match usecases::add_address(
        db.inner().0.as_ref(),
        geocoding.inner().0.as_ref(),
        d.address,
        d.note,
    ) {
        Ok(added) => {
            let pos = added.record.pos;
            match added.correction {
                Some(notice) => Flash::warning(
                    redirect,
                    format!("Address added with a correction: {notice}"),
                ),
                None => Flash::success(
                    redirect,
                    format!(
                        "Address added: {} ({:.6}, {:.6})",
                        added.record.address,
                        pos.lat(),
                        pos.lng()
                    ),
                ),
            }
        }
        Err(err) => Flash::error(redirect, format!("Could not add the address: {err}")),
    }
}

#[post("/addresses", rank = 2)]
pub fn post_add_address_gate() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[derive(FromForm)]
pub struct BatchImportAction<'r> {
    entries: &'r str,
}

#[post("/addresses/batch", data = "<data>")]
pub fn post_batch_import(
    _session: Session,
    db: &State<Repo>,
    geocoding: &State<GeoCoding>,
    cfg: &State<Cfg>,
    data: Form<BatchImportAction<'_>>,
) -> Flash<Redirect> {
    let outcome = usecases::import_addresses(
        db.inner().0.as_ref(),
        geocoding.inner().0.as_ref(),
        data.entries,
        cfg.batch_delay,
        |done, total, address, status| {
            log::info!("batch import {done}/{total}: {address} -> {status:?}");
        },
    );
    let redirect = Redirect::to(uri!(get_index));
    if outcome.total() == 0 {
        return Flash::error(redirect, "Nothing to import.");
    }
    let mut msg = format!(
        "Batch import finished: {} added, {} corrected, {} failed.",
        outcome.succeeded.len(),
        outcome.corrected.len(),
        outcome.failed.len()
    );
    if outcome.failed.is_empty() {
        Flash::success(redirect, msg)
    } else {
        let reasons: Vec<String> = outcome
            .failed
            .iter()
            .map(|(address, reason)| format!("{address}: {reason}"))
            .collect();
        msg.push_str(" Failed: ");
        msg.push_str(&reasons.join("; "));
        Flash::warning(redirect, msg)
    }
}

#[post("/addresses/batch", rank = 2)]
pub fn post_batch_import_gate() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[post("/addresses/<index>/delete")]
pub fn post_delete_address(
    _session: Session,
    db: &State<Repo>,
    index: usize,
) -> Flash<Redirect> {
    let redirect = Redirect::to(uri!(get_index));
    match usecases::delete_address(db.inner().0.as_ref(), index) {
        Ok(()) => Flash::success(redirect, "Address deleted."),
        Err(err) => Flash::error(redirect, format!("Could not delete the address: {err}")),
    }
}

#[post("/addresses/<_index>/delete", rank = 2)]
pub fn post_delete_address_gate(_index: usize) -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[get("/map")]
pub fn get_map(_session: Session, db: &State<Repo>, cfg: &State<Cfg>) -> Result<Markup> {
    let records = usecases::list_addresses(db.inner().0.as_ref())?;
    let map = usecases::map_view(&records);
    Ok(view::map_page(&map, cfg.gate_password.is_some()))
}

#[get("/map", rank = 2)]
pub fn get_map_gate() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[get("/map.js")]
pub fn get_map_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_index_gate,
        get_map,
        get_map_gate,
        get_map_js,
        get_main_css,
        post_add_address,
        post_add_address_gate,
        post_batch_import,
        post_batch_import_gate,
        post_delete_address,
        post_delete_address_gate,
        login::get_login,
        login::post_login,
        login::post_logout,
    ]
}
