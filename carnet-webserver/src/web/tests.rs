use std::time::Duration;

use rocket::{
    http::{ContentType, Status},
    local::blocking::Client,
};

use carnet_core::entities::{AddressRecord, MapPoint};

use super::{
    guards::COOKIE_SESSION_KEY,
    mockdb::{MockDb, StubGeocoder},
    mounts, rocket_instance, Cfg,
};

fn setup(gate_password: Option<&str>) -> (Client, MockDb) {
    let db = MockDb::default();
    let cfg = Cfg {
        gate_password: gate_password.map(ToString::to_string),
        batch_delay: Duration::ZERO,
    };
    let instance = rocket_instance(
        None,
        Box::new(db.clone()),
        Box::new(StubGeocoder),
        cfg,
        mounts(),
    );
    (Client::tracked(instance).unwrap(), db)
}

fn record(address: &str, lat: f64, lng: f64, note: &str) -> AddressRecord {
    AddressRecord {
        address: address.to_string(),
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        note: note.to_string(),
    }
}

#[test]
fn index_lists_stored_addresses() {
    let (client, db) = setup(None);
    db.records
        .lock()
        .unwrap()
        .push(record("Tour Eiffel", 48.858370, 2.294481, "vue"));
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Tour Eiffel"));
    assert!(body.contains("vue"));
    assert!(body.contains("action=\"/addresses\""));
    assert!(body.contains("action=\"/addresses/batch\""));
}

#[test]
fn index_flags_out_of_bounds_records() {
    let (client, db) = setup(None);
    db.records
        .lock()
        .unwrap()
        .push(record("Berlin", 52.52, 13.405, ""));
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("hors carte"));
}

#[test]
fn add_address_persists_and_redirects() {
    let (client, db) = setup(None);
    let res = client
        .post("/addresses")
        .header(ContentType::Form)
        .body("address=Tour%20Eiffel%2C%2075007%20Paris&note=vue")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/"));
    let records = db.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address, "Tour Eiffel, 75007 Paris");
    assert_eq!(records[0].note, "vue");
    assert!((records[0].pos.lat() - 48.858370).abs() < 1e-6);
}

#[test]
fn add_address_failure_keeps_the_store_untouched() {
    let (client, db) = setup(None);
    let res = client
        .post("/addresses")
        .header(ContentType::Form)
        .body("address=nowhere%20in%20particular&note=")
        .dispatch();
    // Failures flash and redirect too; only the message differs.
    assert_eq!(res.status(), Status::SeeOther);
    assert!(db.records.lock().unwrap().is_empty());
}

#[test]
fn delete_removes_exactly_one_record() {
    let (client, db) = setup(None);
    {
        let mut records = db.records.lock().unwrap();
        records.push(record("a", 45.0, 2.0, ""));
        records.push(record("b", 46.0, 3.0, ""));
        records.push(record("c", 47.0, 4.0, ""));
    }
    let res = client.post("/addresses/0/delete").dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    let records = db.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.address != "a"));
}

#[test]
fn batch_import_classifies_items() {
    let (client, db) = setup(None);
    let res = client
        .post("/addresses/batch")
        .header(ContentType::Form)
        .body("entries=Tour%20Eiffel%20(vue)%2C%20nowhere%2C%20Vieux-Port")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    let records = db.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].address, "Tour Eiffel");
    assert_eq!(records[0].note, "vue");
    assert_eq!(records[1].address, "Vieux-Port");
}

#[test]
fn map_page_renders_markers() {
    let (client, db) = setup(None);
    {
        let mut records = db.records.lock().unwrap();
        records.push(record("Tour Eiffel", 48.858370, 2.294481, "vue"));
        records.push(record("Berlin", 52.52, 13.405, "")); // not on the map
    }
    let body = client.get("/map").dispatch().into_string().unwrap();
    assert!(body.contains("CARNET_MAP_PINS"));
    assert!(body.contains("Tour Eiffel (vue)"));
    assert!(!body.contains("\"label\":\"Berlin\""));
    assert!(body.contains("maps?layer=c&cbll=48.85837,2.294481"));
}

#[test]
fn empty_map_uses_the_country_default() {
    let (client, _db) = setup(None);
    let body = client.get("/map").dispatch().into_string().unwrap();
    assert!(body.contains("CARNET_MAP_CENTER=[46.603354,1.888334]"));
    assert!(body.contains("CARNET_MAP_ZOOM=6"));
    assert!(body.contains("CARNET_MAP_BOUNDS=null"));
}

#[test]
fn gate_redirects_unauthenticated_visitors() {
    let (client, _db) = setup(Some("sesame"));
    for path in ["/", "/map"] {
        let res = client.get(path).dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
    }
}

#[test]
fn login_with_the_wrong_password_is_rejected() {
    let (client, _db) = setup(Some("sesame"));
    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("password=wrong")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/login"));
    // Still locked out.
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::SeeOther);
}

#[test]
fn login_with_the_right_password_opens_the_gate() {
    let (client, _db) = setup(Some("sesame"));
    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("password=sesame")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert!(res
        .headers()
        .iter()
        .any(|h| h.name.as_str() == "Set-Cookie" && h.value.starts_with(COOKIE_SESSION_KEY)));
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn gate_is_disabled_without_a_password() {
    let (client, _db) = setup(None);
    assert_eq!(client.get("/").dispatch().status(), Status::Ok);
    let res = client.get("/login").dispatch();
    // Nothing to log into.
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/"));
}

#[test]
fn static_assets_are_served() {
    let (client, _db) = setup(None);
    let res = client.get("/map.js").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(res.into_string().unwrap().contains("fitBounds"));
    let res = client.get("/main.css").dispatch();
    assert_eq!(res.status(), Status::Ok);
}
