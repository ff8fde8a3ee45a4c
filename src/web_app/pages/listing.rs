// web_app/pages/listing.rs - Browse and "your items" pages
//
// Both pages are the same ItemListView under a different ListScope.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::ItemListView;
use crate::web_app::model::ListScope;

#[component]
fn ListingPage(scope: ListScope, page_title: &'static str) -> impl IntoView {
    view! {
        <Title text=page_title />
        <main class="min-h-screen bg-gray-50 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-800">{scope.title()}</h1>
                    <a
                        href="/"
                        class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 font-semibold rounded-full transition-colors"
                    >
                        "Back to Home"
                    </a>
                </div>
                <ItemListView scope=scope />
            </div>
        </main>
    }
}

/// Every posted item, with search and type filters
#[component]
pub fn BrowsePage() -> impl IntoView {
    view! { <ListingPage scope=ListScope::All page_title="Browse Items - Bullwork Finder" /> }
}

/// Items posted by the logged-in user; a 401 sends the browser home
#[component]
pub fn YourItemsPage() -> impl IntoView {
    view! { <ListingPage scope=ListScope::Mine page_title="Your Items - Bullwork Finder" /> }
}
