// web_app/components/item.rs - Item display components
//
// - ItemCard: one lost/found item with image, badge and poster details
// - RecentItemTile: compact hover tile used on the home page
// - ItemGrid: grid layout with an empty state

use leptos::prelude::*;
use crate::web_app::model::Item;
use super::common::TypeBadge;

/// Full item card used by the list views
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let image = item.image_src();
    let posted_by = item.poster_name().to_string();
    let posted_on = item.posted_on();

    view! {
        <div class="bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                    border border-gray-100 flex flex-col h-full overflow-hidden">
            <div class="relative h-48 bg-gray-100">
                <img src=image alt=item.item_name.clone() class="w-full h-full object-cover" />
                <div class="absolute top-4 right-4">
                    <TypeBadge item_type=item.item_type />
                </div>
            </div>

            <div class="p-5 flex flex-col flex-1">
                <h3 class="font-bold text-gray-900 mb-2 text-lg">{item.item_name.clone()}</h3>
                <p class="text-gray-600 text-sm mb-4 line-clamp-3 flex-1">{item.description.clone()}</p>

                <div class="text-xs text-gray-500 space-y-1 pt-3 border-t border-gray-100">
                    <div>
                        <span class="font-semibold">"Location: "</span>
                        <span>{item.location.clone()}</span>
                    </div>
                    <div>
                        <span class="font-semibold">"Posted by: "</span>
                        <span>{posted_by}</span>
                    </div>
                    <div>
                        <span class="font-semibold">"Posted on: "</span>
                        <span>{posted_on}</span>
                    </div>
                    {item.contact.clone().filter(|c| !c.is_empty()).map(|contact| view! {
                        <div>
                            <span class="font-semibold">"Contact: "</span>
                            <span>{contact}</span>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Image tile whose details slide in on hover
#[component]
pub fn RecentItemTile(item: Item) -> impl IntoView {
    let image = item.image_src();
    let posted_by = item.poster_name().to_string();

    view! {
        <div class="group relative flex-none w-full md:w-1/5 h-64 rounded-xl shadow-lg \
                    hover:shadow-2xl transition-shadow duration-300 overflow-hidden">
            <img
                src=image
                alt=item.item_name.clone()
                class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
            />
            <div class="absolute inset-x-0 bottom-0 p-4 text-white bg-gradient-to-t from-black via-black/80 \
                        to-transparent transform translate-y-full group-hover:translate-y-0 transition-transform duration-500">
                <h3 class="text-xl font-bold mb-1">{item.item_name.clone()}</h3>
                <p class="text-sm line-clamp-2 mb-2">{item.description.clone()}</p>
                <div class="text-xs text-gray-200">
                    <p><strong>"Location: "</strong>{item.location.clone()}</p>
                    <p><strong>"Posted by: "</strong>{posted_by}</p>
                    <p><strong>"Posted on: "</strong>{item.posted_on()}</p>
                </div>
            </div>
            <div class="absolute top-4 right-4">
                <TypeBadge item_type=item.item_type />
            </div>
        </div>
    }
}

/// Grid of item cards, or `empty_message` when there is nothing to show
#[component]
pub fn ItemGrid(
    items: Signal<Vec<Item>>,
    empty_message: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=move || view! {
                <p class="text-center text-gray-500 italic py-16">{empty_message}</p>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=|item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}
