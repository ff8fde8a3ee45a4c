// web_app/api/session.rs - Session cookie forwarding
//
// The service authenticates with a session cookie it sets after OTP
// verification. The browser holds that cookie for *our* host, so the server
// functions pass the incoming Cookie header through and relay any Set-Cookie
// coming back.

use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::RequestBuilder;

/// Cookies of the browser request being served
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    cookie: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn from_cookie_header(header: Option<&str>) -> Self {
        Session {
            cookie: header
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.cookie.is_none()
    }

    pub fn attach(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }
}

/// A reply together with the cookies the service asked us to set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReply<T> {
    pub body: T,
    pub set_cookies: Vec<String>,
}

/// Set-Cookie values of a reply, rewritten for the front-end host
pub fn set_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(relayable_cookie)
        .collect()
}

/// Drop the `Domain` attribute so the cookie binds to the host that relays it
pub fn relayable_cookie(raw: &str) -> String {
    raw.split(';')
        .map(str::trim)
        .filter(|attr| !attr.is_empty())
        .filter(|attr| {
            !attr
                .split('=')
                .next()
                .map(|name| name.trim().eq_ignore_ascii_case("domain"))
                .unwrap_or(false)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
