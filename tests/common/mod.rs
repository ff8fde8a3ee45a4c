// common/mod.rs - In-process fake of the lost-and-found REST service
//
// Serves the fixture catalogue over the same routes and JSON shapes as the
// real service, on 127.0.0.1 with an OS-assigned port. The session cookie is
// `token=valid`; verify-otp hands it out for the code `123456`.

#![allow(dead_code)]

use std::net::TcpListener;
use std::time::Duration;

use actix_web::http::header::{COOKIE, SET_COOKIE};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;

use bullwork_finder::fixtures::items::{catalogue, slice_page};
use bullwork_finder::web_app::api::{ApiClient, Session};
use bullwork_finder::web_app::config::Settings;
use bullwork_finder::web_app::model::Item;

pub const SESSION_COOKIE: &str = "token=valid";
pub const VALID_OTP: &str = "123456";
pub const UNKNOWN_EMAIL: &str = "nobody@bullwork.com";
pub const TAKEN_EMAIL: &str = "taken@bullwork.com";
/// Reports with this name are rejected with a 400
pub const REJECTED_NAME: &str = "Duplicate";
/// Owner of the items behind `/items/my-items`
pub const OWNER: &str = "Asha";

pub struct FakeService {
    pub base_url: String,
}

impl FakeService {
    pub fn settings(&self) -> Settings {
        Settings {
            api_base_url: self.base_url.clone(),
            request_timeout: Some(Duration::from_secs(5)),
            ..Settings::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.settings()).expect("client should build")
    }
}

pub fn logged_in() -> Session {
    Session::from_cookie_header(Some(SESSION_COOKIE))
}

/// Start the fake service on a free port; it runs until the test runtime ends
pub async fn spawn_fake_service() -> anyhow::Result<FakeService> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let items = web::Data::new(catalogue());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(items.clone())
            .service(
                web::scope("/api")
                    .route("/items", web::get().to(list_items))
                    .route("/items/recent", web::get().to(recent_items))
                    .route("/items/my-items", web::get().to(my_items))
                    .route("/items/{kind}", web::post().to(report_item))
                    .route("/auth/check-auth", web::get().to(check_auth))
                    .route("/auth/profile", web::get().to(profile))
                    .route("/auth/login", web::post().to(login))
                    .route("/auth/register", web::post().to(register))
                    .route("/auth/verify-otp", web::post().to(verify_otp))
                    .route("/auth/logout", web::post().to(logout)),
            )
    })
    .workers(1)
    .listen(listener)?
    .run();

    actix_web::rt::spawn(server);

    Ok(FakeService {
        base_url: format!("http://127.0.0.1:{}/api", port),
    })
}

fn has_session(req: &HttpRequest) -> bool {
    req.headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|cookies| cookies.split(';').any(|c| c.trim() == SESSION_COOKIE))
        .unwrap_or(false)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "message": "Not authenticated" }))
}

#[derive(Deserialize)]
struct PageQuery {
    skip: u32,
    take: u32,
}

async fn list_items(items: web::Data<Vec<Item>>, query: web::Query<PageQuery>) -> HttpResponse {
    HttpResponse::Ok().json(slice_page(&items, query.skip, query.take))
}

async fn recent_items(items: web::Data<Vec<Item>>) -> HttpResponse {
    HttpResponse::Ok().json(items.get_ref())
}

async fn my_items(
    req: HttpRequest,
    items: web::Data<Vec<Item>>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    if !has_session(&req) {
        return unauthorized();
    }
    let mine: Vec<Item> = items
        .iter()
        .filter(|item| item.poster_name() == OWNER)
        .cloned()
        .collect();
    HttpResponse::Ok().json(slice_page(&mine, query.skip, query.take))
}

async fn report_item(req: HttpRequest, kind: web::Path<String>, body: web::Bytes) -> HttpResponse {
    if !has_session(&req) {
        return unauthorized();
    }
    let is_multipart = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);
    if !is_multipart {
        return HttpResponse::BadRequest().json(json!({ "error": "Expected multipart form data" }));
    }

    let text = String::from_utf8_lossy(&body);
    if !text.contains(&format!("\r\n\r\n{}\r\n", kind.as_str())) {
        return HttpResponse::BadRequest().json(json!({ "error": "itemType does not match route" }));
    }
    if text.contains(REJECTED_NAME) {
        return HttpResponse::BadRequest().json(json!({ "error": "Item already reported" }));
    }

    HttpResponse::Created().json(json!({ "message": format!("{} item reported", kind.as_str()) }))
}

async fn check_auth(req: HttpRequest) -> HttpResponse {
    if has_session(&req) {
        HttpResponse::Ok().json(json!({ "message": "Authenticated" }))
    } else {
        unauthorized()
    }
}

async fn profile(req: HttpRequest) -> HttpResponse {
    if !has_session(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "name": OWNER,
        "email": "asha@bullwork.com",
        "phoneNumber": "9999999999"
    }))
}

#[derive(Deserialize)]
struct EmailBody {
    email: String,
}

async fn login(body: web::Json<EmailBody>) -> HttpResponse {
    if body.email == UNKNOWN_EMAIL {
        return HttpResponse::NotFound().json(json!({ "message": "User not found" }));
    }
    HttpResponse::Ok().json(json!({ "message": "OTP sent to your email." }))
}

async fn register(body: web::Json<serde_json::Value>) -> HttpResponse {
    if body["email"] == TAKEN_EMAIL {
        return HttpResponse::BadRequest().json(json!({ "message": "User already exists" }));
    }
    if body["phoneNumber"].as_str().unwrap_or_default().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "message": "phoneNumber is required" }));
    }
    HttpResponse::Created().json(json!({ "message": "User registered successfully" }))
}

#[derive(Deserialize)]
struct OtpBody {
    email: String,
    otp: String,
}

async fn verify_otp(body: web::Json<OtpBody>) -> HttpResponse {
    if body.otp != VALID_OTP || body.email.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "message": "Invalid OTP" }));
    }
    HttpResponse::Ok()
        .insert_header((
            SET_COOKIE,
            format!("{}; Path=/; Domain=localhost; HttpOnly; SameSite=Lax", SESSION_COOKIE),
        ))
        .json(json!({ "message": "Login successful" }))
}

async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((SET_COOKIE, "token=; Path=/; Max-Age=0"))
        .json(json!({ "message": "Logged out successfully" }))
}
