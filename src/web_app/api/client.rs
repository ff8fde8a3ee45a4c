// web_app/api/client.rs - reqwest client for the lost-and-found REST service
//
// One method per endpoint. Non-2xx replies become FinderError::Service (or
// Unauthorized for 401) carrying the service's own message; transport and
// decoding failures become FinderError::Network.

use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::session::{self, Session, SessionReply};
use crate::web_app::config::Settings;
use crate::web_app::error::{FinderError, LOGIN_REQUIRED};
use crate::web_app::loader::{PageRequest, PageSource};
use crate::web_app::model::*;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    settings: Settings,
}

impl ApiClient {
    pub fn new(settings: Settings) -> Result<Self, FinderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FinderError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(ApiClient { http, settings })
    }

    /// Build a client from `BULLWORK_*` environment variables
    pub fn from_env() -> Result<Self, FinderError> {
        Settings::from_env().and_then(ApiClient::new)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A page source over one of the listing endpoints
    pub fn listing(&self, scope: ListScope, session: Session) -> Listing<'_> {
        Listing {
            client: self,
            scope,
            session,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, FinderError> {
        let response = request
            .send()
            .await
            .map_err(|e| FinderError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Service replied {}: {}", status, body);
        Err(FinderError::from_reply(status.as_u16(), &body))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FinderError> {
        response
            .json()
            .await
            .map_err(|e| FinderError::Network(format!("invalid response body: {}", e)))
    }

    /// `GET /items` or `GET /items/my-items`
    pub async fn fetch_listing(
        &self,
        scope: ListScope,
        session: &Session,
        request: PageRequest,
    ) -> Result<ItemPage, FinderError> {
        if scope.requires_session() && session.is_anonymous() {
            return Err(FinderError::Unauthorized(LOGIN_REQUIRED.to_string()));
        }

        let url = self.settings.endpoint(scope.path());
        tracing::debug!("GET {} skip={} take={}", url, request.skip, request.take);

        let builder = self
            .http
            .get(&url)
            .query(&[("skip", request.skip), ("take", request.take)]);
        let response = self.send(session.attach(builder)).await?;
        let page: ItemPage = Self::read_json(response).await?;

        Ok(page.resolve_images(&self.settings.asset_base_url()))
    }

    pub async fn list_items(&self, request: PageRequest) -> Result<ItemPage, FinderError> {
        self.fetch_listing(ListScope::All, &Session::anonymous(), request)
            .await
    }

    pub async fn my_items(
        &self,
        session: &Session,
        request: PageRequest,
    ) -> Result<ItemPage, FinderError> {
        self.fetch_listing(ListScope::Mine, session, request).await
    }

    /// `GET /items/recent`
    pub async fn recent_items(&self) -> Result<Vec<Item>, FinderError> {
        let url = self.settings.endpoint("items/recent");
        let response = self.send(self.http.get(&url)).await?;
        let items: Vec<Item> = Self::read_json(response).await?;

        let asset_base = self.settings.asset_base_url();
        Ok(items
            .into_iter()
            .map(|item| item.resolve_image(&asset_base))
            .collect())
    }

    /// `POST /items/lost` or `POST /items/found` as multipart form data
    pub async fn report_item(
        &self,
        session: &Session,
        report: ReportItem,
    ) -> Result<ApiMessage, FinderError> {
        report.validate()?;

        let url = self
            .settings
            .endpoint(&format!("items/{}", report.item_type.as_str()));

        let mut form = multipart::Form::new()
            .text("itemType", report.item_type.as_str())
            .text("itemName", report.item_name)
            .text("description", report.description)
            .text("location", report.location)
            .text("contact", report.contact);

        if let Some(image) = report.image {
            let part = multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| FinderError::InvalidRequest(format!("bad image type: {}", e)))?;
            form = form.part("image", part);
        }

        tracing::debug!("POST {}", url);
        let response = self
            .send(session.attach(self.http.post(&url).multipart(form)))
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(FinderError::service(status.as_u16(), "Failed to submit item."));
        }

        Ok(response.json::<ApiMessage>().await.unwrap_or_default())
    }

    /// `GET /auth/check-auth`; a 401 means "not logged in", not an error
    pub async fn check_auth(&self, session: &Session) -> Result<bool, FinderError> {
        if session.is_anonymous() {
            return Ok(false);
        }

        let url = self.settings.endpoint("auth/check-auth");
        match self.send(session.attach(self.http.get(&url))).await {
            Ok(_) => Ok(true),
            Err(FinderError::Unauthorized(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// `GET /auth/profile`
    pub async fn profile(&self, session: &Session) -> Result<UserProfile, FinderError> {
        let url = self.settings.endpoint("auth/profile");
        let response = self.send(session.attach(self.http.get(&url))).await?;
        Self::read_json(response).await
    }

    /// `POST /auth/login`; the service mails an OTP to `email`
    pub async fn login(&self, email: &str) -> Result<SessionReply<ApiMessage>, FinderError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(FinderError::InvalidRequest("email is required".to_string()));
        }
        let body = LoginRequest {
            email: email.to_string(),
        };
        self.post_json("auth/login", &Session::anonymous(), &body)
            .await
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        form: &RegisterRequest,
    ) -> Result<SessionReply<ApiMessage>, FinderError> {
        form.validate()?;
        self.post_json("auth/register", &Session::anonymous(), form)
            .await
    }

    /// `POST /auth/verify-otp`; on success the reply carries the session cookie
    pub async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<SessionReply<ApiMessage>, FinderError> {
        let otp = otp.trim();
        if otp.len() != OTP_LENGTH || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(FinderError::InvalidRequest(format!(
                "the code must be {} digits",
                OTP_LENGTH
            )));
        }
        let body = VerifyOtpRequest {
            email: email.trim().to_string(),
            otp: otp.to_string(),
        };
        self.post_json("auth/verify-otp", &Session::anonymous(), &body)
            .await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self, session: &Session) -> Result<SessionReply<ApiMessage>, FinderError> {
        self.post_json("auth/logout", session, &serde_json::json!({}))
            .await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        session: &Session,
        body: &B,
    ) -> Result<SessionReply<ApiMessage>, FinderError> {
        let url = self.settings.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .send(session.attach(self.http.post(&url).json(body)))
            .await?;
        let set_cookies = session::set_cookies(response.headers());
        let body = response.json::<ApiMessage>().await.unwrap_or_default();

        Ok(SessionReply { body, set_cookies })
    }
}

/// One listing endpoint bound to a session
pub struct Listing<'a> {
    client: &'a ApiClient,
    scope: ListScope,
    session: Session,
}

impl PageSource for Listing<'_> {
    async fn fetch_page(&self, request: PageRequest) -> Result<ItemPage, FinderError> {
        self.client
            .fetch_listing(self.scope, &self.session, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_builds_without_timeout() {
        let settings = Settings {
            request_timeout: None,
            ..Settings::default()
        };
        let client = ApiClient::new(settings).unwrap();
        assert_eq!(client.settings().request_timeout, None);
    }

    #[test]
    fn test_client_keeps_settings() {
        let settings = Settings {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            request_timeout: Some(Duration::from_secs(2)),
            ..Settings::default()
        };
        let client = ApiClient::new(settings.clone()).unwrap();
        assert_eq!(client.settings(), &settings);
    }

    #[tokio::test]
    async fn test_mine_listing_without_session_fails_fast() {
        let client = ApiClient::new(Settings {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            ..Settings::default()
        })
        .unwrap();
        let err = client
            .my_items(&Session::anonymous(), PageRequest::new(0, 3).unwrap())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_check_auth_anonymous_is_false_without_io() {
        let client = ApiClient::new(Settings {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            ..Settings::default()
        })
        .unwrap();
        assert!(!client.check_auth(&Session::anonymous()).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_otp_rejects_short_code() {
        let client = ApiClient::new(Settings::default()).unwrap();
        let err = client.verify_otp("a@b.com", "123").await.unwrap_err();
        assert!(matches!(err, FinderError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let client = ApiClient::new(Settings {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            request_timeout: Some(Duration::from_secs(2)),
            ..Settings::default()
        })
        .unwrap();
        let err = client.recent_items().await.unwrap_err();
        assert!(matches!(err, FinderError::Network(_)));
    }
}
