use maud::{html, Markup, PreEscaped, DOCTYPE};
use rocket::request::FlashMessage;
use serde::Serialize;

use carnet_core::{entities::AddressRecord, france, usecases::MapView};

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str="sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512 : &str="sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const MAP_JS_URL: &str = "/map.js";

fn page(title: &str, gate_enabled: bool, head: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/main.css";
                @if let Some(h) = head { (h) }
            }
            body {
                header {
                    nav {
                        a href="/" { "addresses" }
                        a href="/map" { "map" }
                        @if gate_enabled {
                            form class="logout" action="/logout" method="POST" {
                                input type="submit" value="logout";
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}

fn flash_msg(flash: Option<&FlashMessage<'_>>) -> Markup {
    match flash {
        Some(msg) => html! {
            div class=(format!("flash {}", msg.kind())) { (msg.message()) }
        },
        None => html! {},
    }
}

fn leaflet_css_link() -> Markup {
    html! {
        link
            rel="stylesheet"
            href=(LEAFLET_CSS_URL)
            integrity=(LEAFLET_CSS_SHA512)
            crossorigin="anonymous";
    }
}

pub fn manage(
    records: &[AddressRecord],
    flash: Option<&FlashMessage<'_>>,
    gate_enabled: bool,
) -> Markup {
    page(
        "Carnet d'adresses",
        gate_enabled,
        None,
        html! {
            main {
                (flash_msg(flash))
                h1 { "Carnet d'adresses" }
                div class="add-form" {
                    h3 { "Add an address" }
                    form action="/addresses" method="POST" {
                        input
                            type="text"
                            name="address"
                            size=(50)
                            maxlength=(200)
                            placeholder="e.g. Tour Eiffel, 75007 Paris"
                            required?;
                        input
                            type="text"
                            name="note"
                            size=(30)
                            maxlength=(200)
                            placeholder="note (optional)";
                        input class="btn" type="submit" value="add";
                    }
                }
                div class="batch-form" {
                    h3 { "Batch import" }
                    p class="hint" {
                        "Comma-separated addresses, a note in parentheses: "
                        em { "Louvre (musée), Panthéon" }
                        ". Addresses and notes must not contain commas."
                    }
                    form action="/addresses/batch" method="POST" {
                        textarea name="entries" rows="4" cols="80" {}
                        br;
                        input class="btn" type="submit" value="import";
                    }
                }
                (address_table(records))
            }
        },
    )
}

fn address_table(records: &[AddressRecord]) -> Markup {
    html! {
        div class="records" {
            h3 { (format!("Stored addresses ({})", records.len())) }
            @if records.is_empty() {
                p { "No addresses yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Address" }
                            th { "Latitude" }
                            th { "Longitude" }
                            th { "Note" }
                            th { }
                        }
                    }
                    tbody {
                        @for (i, r) in records.iter().enumerate() {
                            tr {
                                td { (i) }
                                td {
                                    (r.address)
                                    @if !france::contains(r.pos) {
                                        " "
                                        span class="warn" title="outside France, not shown on the map" {
                                            "(hors carte)"
                                        }
                                    }
                                }
                                td { (format!("{:.6}", r.pos.lat())) }
                                td { (format!("{:.6}", r.pos.lng())) }
                                td { (r.note) }
                                td {
                                    form action=(format!("/addresses/{i}/delete")) method="POST" {
                                        input type="submit" value="delete";
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn map_page(map: &MapView, gate_enabled: bool) -> Markup {
    page(
        "Carnet — map",
        gate_enabled,
        Some(leaflet_css_link()),
        html! {
            main {
                div id="map" {}
                (map_scripts(map))
            }
        },
    )
}

pub fn login(flash: Option<&FlashMessage<'_>>) -> Markup {
    page(
        "Carnet — login",
        false,
        None,
        html! {
            main {
                (flash_msg(flash))
                div class="login" {
                    h1 { "Carnet d'adresses" }
                    form action="/login" method="POST" {
                        input type="password" name="password" placeholder="password" required?;
                        input class="btn" type="submit" value="enter";
                    }
                }
            }
        },
    )
}

#[derive(Debug, Serialize)]
struct MapPin<'a> {
    lat: f64,
    lng: f64,
    label: &'a str,
    url: &'a str,
}

fn map_scripts(map: &MapView) -> Markup {
    let pins: Vec<MapPin<'_>> = map
        .markers
        .iter()
        .map(|m| MapPin {
            lat: m.pos.lat(),
            lng: m.pos.lng(),
            label: &m.label,
            url: &m.street_view_url,
        })
        .collect();
    let pins = serde_json::to_string(&pins).unwrap_or_else(|_| "[]".to_string());
    let bounds = match map.fit_bounds {
        Some(bb) => format!(
            "[[{},{}],[{},{}]]",
            bb.southwest().lat(),
            bb.southwest().lng(),
            bb.northeast().lat(),
            bb.northeast().lng()
        ),
        None => "null".to_string(),
    };
    html! {
        script {
            (PreEscaped(format!(
                "window.CARNET_MAP_PINS={pins};window.CARNET_MAP_CENTER=[{},{}];window.CARNET_MAP_ZOOM={};window.CARNET_MAP_BOUNDS={bounds};",
                map.center.lat(),
                map.center.lng(),
                map.zoom
            )))
        }
        script
            src=(LEAFLET_JS_URL)
            integrity=(LEAFLET_JS_SHA512)
            crossorigin="anonymous" {}
        script src=(MAP_JS_URL) {}
    }
}
