// web_app/app.rs - Root application component
//
// Sets up meta context, the stylesheet and the router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bullwork Finder" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/bullwork_finder.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/browse") view=BrowsePage />
                <Route path=path!("/your-items") view=YourItemsPage />
                <Route path=path!("/lost") view=LostPage />
                <Route path=path!("/found") view=FoundPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/otp") view=OtpPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-teal-500 text-white rounded-lg hover:bg-teal-600 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}
