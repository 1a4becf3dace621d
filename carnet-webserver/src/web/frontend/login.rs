use maud::Markup;
use rocket::{
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::{super::guards::*, view};
use crate::web::Cfg;

#[derive(FromForm)]
pub struct GateCredentials<'r> {
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    cfg: &State<Cfg>,
    session: Option<Session>,
    flash: Option<FlashMessage<'_>>,
) -> std::result::Result<Markup, Redirect> {
    if cfg.gate_password.is_none() || session.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash.as_ref()))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    cfg: &State<Cfg>,
    credentials: Form<GateCredentials<'_>>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(expected) = cfg.gate_password.as_deref() else {
        return Ok(Redirect::to(uri!(super::get_index)));
    };
    if credentials.password == expected {
        cookies.add_private(
            Cookie::build((COOKIE_SESSION_KEY, SESSION_COOKIE_VALUE))
                .http_only(true)
                .same_site(SameSite::Lax),
        );
        Ok(Redirect::to(uri!(super::get_index)))
    } else {
        Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "Wrong password.",
        ))
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(Cookie::from(COOKIE_SESSION_KEY));
    Flash::success(
        Redirect::to(uri!(get_login)),
        "You have been logged out.",
    )
}
