// web_app/server_fns.rs - Leptos server function declarations
//
// Compiled for both ssr and hydrate. On the server each function forwards to
// the REST service through ApiClient, passing the browser's Cookie header
// along and relaying Set-Cookie back. On the client the #[server] macro turns
// each one into a POST to /api.

use leptos::prelude::*;
use crate::web_app::error::LOGIN_REQUIRED;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
use crate::web_app::{
    api::{ApiClient, Session},
    error::FinderError,
};

#[cfg(feature = "ssr")]
async fn client() -> Result<ApiClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::shared;

    // Context first (tests), then the process-wide client, then app data
    if let Some(client) = use_context::<ApiClient>() {
        return Ok(client);
    }

    if let Some(client) = shared::get_client() {
        return Ok(client);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(data) = req.app_data::<Data<ApiClient>>() {
                return Ok(data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("API client not available"))
}

/// Cookies of the browser request being served
#[cfg(feature = "ssr")]
async fn session() -> Session {
    use actix_web::{http::header::COOKIE, HttpRequest};
    use leptos_actix::extract;

    match extract::<HttpRequest>().await {
        Ok(req) => Session::from_cookie_header(
            req.headers().get(COOKIE).and_then(|value| value.to_str().ok()),
        ),
        Err(e) => {
            tracing::warn!("No request to read cookies from: {}", e);
            Session::anonymous()
        }
    }
}

#[cfg(feature = "ssr")]
fn relay_cookies(cookies: &[String]) {
    use actix_web::http::header::{HeaderValue, SET_COOKIE};
    use leptos_actix::ResponseOptions;

    if cookies.is_empty() {
        return;
    }
    let Some(response) = use_context::<ResponseOptions>() else {
        tracing::warn!("Dropping {} Set-Cookie header(s): no response context", cookies.len());
        return;
    };
    for cookie in cookies {
        match HeaderValue::from_str(cookie) {
            Ok(value) => response.append_header(SET_COOKIE, value),
            Err(e) => tracing::warn!("Skipping malformed Set-Cookie: {}", e),
        }
    }
}

/// Whether a listing failed for lack of a session; the server has already
/// issued a redirect home for it
pub fn is_login_required(err: &ServerFnError) -> bool {
    matches!(err, ServerFnError::ServerError(message) if message == LOGIN_REQUIRED)
}

#[cfg(feature = "ssr")]
fn into_server_error(e: FinderError) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// One page of a listing; `Mine` needs the session cookie.
///
/// Without `take` the configured page size is used.
#[server(FetchItemPage, "/api")]
pub async fn fetch_item_page(
    scope: ListScope,
    skip: u32,
    take: Option<u32>,
) -> Result<ItemPage, ServerFnError> {
    use crate::web_app::loader::fetch_page;

    tracing::info!("Item page request: scope={:?}, skip={}, take={:?}", scope, skip, take);

    let client = client().await?;
    let session = if scope.requires_session() {
        session().await
    } else {
        Session::anonymous()
    };
    let settings = client.settings();
    let take = settings.clamp_take(take.unwrap_or(settings.page_size));

    let result = fetch_page(&client.listing(scope, session), skip, take).await;

    match &result {
        Ok(page) => tracing::info!(
            "Page loaded: {} items, {} in total",
            page.items.len(),
            page.total_items_count
        ),
        Err(e) => tracing::error!("Page load failed: {}", e),
    }

    result.map_err(|e| {
        if e.is_unauthorized() {
            leptos_actix::redirect("/");
            return ServerFnError::new(LOGIN_REQUIRED);
        }
        into_server_error(e)
    })
}

/// Newest items for the home page
#[server(RecentItems, "/api")]
pub async fn recent_items() -> Result<Vec<Item>, ServerFnError> {
    let client = client().await?;
    let mut items = client.recent_items().await.map_err(|e| {
        tracing::error!("Recent items failed: {}", e);
        into_server_error(e)
    })?;

    items.truncate(client.settings().recent_limit);
    tracing::info!("Returning {} recent items", items.len());
    Ok(items)
}

/// Report a lost or found item; returns the confirmation text
#[server(SubmitReport, "/api")]
pub async fn submit_report(report: ReportItem) -> Result<String, ServerFnError> {
    let item_type = report.item_type;
    tracing::info!("Report request: type={}, name='{}'", item_type, report.item_name);

    let client = client().await?;
    let session = session().await;

    let reply = client.report_item(&session, report).await.map_err(|e| {
        tracing::error!("Report failed: {}", e);
        into_server_error(e)
    })?;

    let fallback = match item_type {
        ItemType::Lost => {
            "Your lost item has been reported successfully! We hope you find it soon."
        }
        ItemType::Found => "Your found item has been reported successfully! Thank you!",
    };
    Ok(reply.text_or(fallback))
}

/// Whether the browser holds a valid session; failures count as "no"
#[server(CheckAuth, "/api")]
pub async fn check_auth() -> Result<bool, ServerFnError> {
    let client = client().await?;
    let session = session().await;

    Ok(client.check_auth(&session).await.unwrap_or_else(|e| {
        tracing::warn!("Auth check failed: {}", e);
        false
    }))
}

#[server(GetProfile, "/api")]
pub async fn get_profile() -> Result<UserProfile, ServerFnError> {
    let client = client().await?;
    let session = session().await;

    client.profile(&session).await.map_err(|e| {
        tracing::error!("Profile fetch failed: {}", e);
        into_server_error(e)
    })
}

/// Ask the service to mail a one-time code
#[server(Login, "/api")]
pub async fn login(email: String) -> Result<String, ServerFnError> {
    tracing::info!("Login request for '{}'", email);

    let client = client().await?;
    let reply = client.login(&email).await.map_err(into_server_error)?;

    relay_cookies(&reply.set_cookies);
    Ok(reply.body.text_or("OTP sent to your email."))
}

#[server(Register, "/api")]
pub async fn register(form: RegisterRequest) -> Result<String, ServerFnError> {
    tracing::info!("Register request for '{}'", form.email);

    let client = client().await?;
    let reply = client.register(&form).await.map_err(into_server_error)?;

    relay_cookies(&reply.set_cookies);
    Ok(reply.body.text_or("Registration successful. Please log in."))
}

/// Check the one-time code; success sets the session cookie
#[server(VerifyOtp, "/api")]
pub async fn verify_otp(email: String, otp: String) -> Result<String, ServerFnError> {
    tracing::info!("OTP verification for '{}'", email);

    let client = client().await?;
    let reply = client
        .verify_otp(&email, &otp)
        .await
        .map_err(into_server_error)?;

    relay_cookies(&reply.set_cookies);
    Ok(reply.body.text_or("Verification successful!"))
}

#[server(Logout, "/api")]
pub async fn logout() -> Result<String, ServerFnError> {
    let client = client().await?;
    let session = session().await;

    let reply = client.logout(&session).await.map_err(into_server_error)?;

    relay_cookies(&reply.set_cookies);
    Ok(reply.body.text_or("Logged out."))
}
