// web_app/pages/report.rs - Lost and found report pages

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::ReportForm;
use crate::web_app::model::ItemType;

#[component]
fn ReportPage(item_type: ItemType) -> impl IntoView {
    let page_title = match item_type {
        ItemType::Lost => "Report Lost Item - Bullwork Finder",
        ItemType::Found => "Report Found Item - Bullwork Finder",
    };

    view! {
        <Title text=page_title />
        <main class="min-h-screen bg-gray-50 py-12 px-4">
            <ReportForm item_type=item_type />
        </main>
    }
}

#[component]
pub fn LostPage() -> impl IntoView {
    view! { <ReportPage item_type=ItemType::Lost /> }
}

#[component]
pub fn FoundPage() -> impl IntoView {
    view! { <ReportPage item_type=ItemType::Found /> }
}
