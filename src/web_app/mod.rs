// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - loader.rs: Paginated list state, de-duplication and filtering
// - error.rs / config.rs: Error type and runtime settings
// - api/: REST client for the lost-and-found service (server only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/, pages/, app.rs: UI (both SSR and hydrate)

pub mod config;
pub mod error;
pub mod loader;
pub mod model;

// REST client and session forwarding (native only)
pub mod api;

cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        // The #[server] macro generates client stubs that call the server via HTTP
        pub mod server_fns;
        pub mod components;
        pub mod pages;
        pub mod app;

        pub use app::App;
    }
}
