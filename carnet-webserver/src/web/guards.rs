use rocket::{
    http::Status,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::Cfg;

pub const COOKIE_SESSION_KEY: &str = "carnet-session";
pub const SESSION_COOKIE_VALUE: &str = "authenticated";

/// Proof that the request passed the shared-password gate. When no
/// password is configured the gate is disabled and every request
/// qualifies. Guarded routes pair with a rank-2 twin that redirects
/// to the login page when this guard forwards.
#[derive(Debug)]
pub struct Session;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cfg = match request.guard::<&State<Cfg>>().await {
            Outcome::Success(cfg) => cfg,
            _ => return Outcome::Error((Status::InternalServerError, ())),
        };
        if cfg.gate_password.is_none() {
            return Outcome::Success(Session);
        }
        let authenticated = request
            .cookies()
            .get_private(COOKIE_SESSION_KEY)
            .map(|cookie| cookie.value() == SESSION_COOKIE_VALUE)
            .unwrap_or(false);
        if authenticated {
            Outcome::Success(Session)
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}
