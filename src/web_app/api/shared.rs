// web_app/api/shared.rs - Process-wide API client
//
// This module provides the client registry the server functions fall back on
// when no client was put into the Leptos context.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::client::ApiClient;

static CLIENT: OnceLock<ApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_client(client: ApiClient) {
    tracing::info!(
        "Initializing global API client for {}",
        client.settings().api_base_url
    );
    if CLIENT.set(client).is_err() {
        tracing::warn!("API client already initialized");
    } else {
        tracing::info!("Global API client initialized successfully");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ApiClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Drop the testing override so the global client is used again
pub fn clear_test_client() {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}

/// Get the global API client
pub fn get_client() -> Option<ApiClient> {
    // Check for test override first
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global API client is not initialized!");
    }
    client
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::config::Settings;

    #[test]
    fn test_override_takes_precedence() {
        let settings = Settings {
            api_base_url: "http://override.test/api".to_string(),
            ..Settings::default()
        };
        set_test_client(ApiClient::new(settings).unwrap());

        let client = get_client().expect("override should be visible");
        assert_eq!(client.settings().api_base_url, "http://override.test/api");

        clear_test_client();
        let fallback = get_client().map(|c| c.settings().api_base_url.clone());
        assert_ne!(fallback.as_deref(), Some("http://override.test/api"));
    }
}
