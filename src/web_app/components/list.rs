// web_app/components/list.rs - Paginated item list view
//
// One component serves both the public listing and "your items". It owns a
// ListState signal, pulls pages through the fetch_item_page server function
// and renders the filtered view of what has been loaded so far.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::config::DEFAULT_PAGE_SIZE;
use crate::web_app::loader::ListState;
use crate::web_app::model::{Item, ListScope, TypeFilter};
use crate::web_app::server_fns::{fetch_item_page, is_login_required};
use super::common::{server_error_message, Button, ErrorDisplay, Loading, TextInput};
use super::item::ItemGrid;

const FILTERS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Lost, TypeFilter::Found];

fn filter_button_class(option: TypeFilter, active: bool) -> &'static str {
    match (option, active) {
        (_, false) => "px-4 py-2 rounded-full font-medium bg-gray-200 text-gray-700 hover:bg-gray-300 transition-colors",
        (TypeFilter::All, true) => "px-4 py-2 rounded-full font-medium bg-gray-800 text-white shadow-md",
        (TypeFilter::Lost, true) => "px-4 py-2 rounded-full font-medium bg-red-500 text-white shadow-md",
        (TypeFilter::Found, true) => "px-4 py-2 rounded-full font-medium bg-teal-500 text-white shadow-md",
    }
}

/// Nothing fetched yet and nothing failed. Also true while rendering on the
/// server, where the first fetch never starts.
fn awaiting_first_page(state: &ListState, failed: bool) -> bool {
    !failed && state.is_empty() && state.has_more() && state.cursor() == 0
}

/// Search box plus All / Lost / Found buttons.
///
/// Picking a type clears the search term.
#[component]
pub fn FilterBar(
    search: RwSignal<String>,
    filter: RwSignal<TypeFilter>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-4 mb-8 items-center">
            <div class="flex-1 w-full">
                <TextInput value=search placeholder="Search for an item..." />
            </div>
            <div class="flex gap-2">
                {FILTERS.into_iter().map(|option| view! {
                    <button
                        type="button"
                        class=move || filter_button_class(option, filter.get() == option)
                        on:click=move |_| {
                            filter.set(option);
                            search.set(String::new());
                        }
                    >
                        {option.label()}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

/// "Load More" button, disabled while a page is on its way
#[component]
pub fn LoadMore(
    on_load: Callback<()>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center mt-10">
            <Button on_click=on_load disabled=loading class="px-8 rounded-full">
                "Load More"
            </Button>
        </div>
    }
}

/// Incrementally loaded list of items for `scope`
#[component]
pub fn ItemListView(scope: ListScope) -> impl IntoView {
    let state = RwSignal::new(ListState::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(TypeFilter::All);

    let load = move || {
        // try_update is None only once the signal is disposed
        let Some(request) = state.try_update(|s| s.begin_fetch(DEFAULT_PAGE_SIZE)).flatten() else {
            return;
        };
        error.set(None);

        spawn_local(async move {
            // No take: the server uses its configured page size
            match fetch_item_page(scope, request.skip, None).await {
                Ok(page) => state.update(|s| s.complete_fetch(request, page)),
                Err(e) => {
                    state.update(|s| s.abort_fetch());
                    // The redirect home is already under way
                    if !is_login_required(&e) {
                        error.set(Some(server_error_message(&e)));
                    }
                }
            }
        });
    };

    // First page; effects only run in the browser
    Effect::new(move |_| load());

    let visible = Signal::derive(move || {
        let term = search.get();
        let kind = filter.get();
        state.with(|s| {
            s.filter_view(&term, kind)
                .into_iter()
                .cloned()
                .collect::<Vec<Item>>()
        })
    });

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let first_load = move || state.with(|s| awaiting_first_page(s, error.with(|e| e.is_some())));
    let searching = move || !search.get().trim().is_empty();
    let show_load_more =
        move || state.with(|s| s.has_more()) && !searching() && !loading.get() && !first_load();
    let show_end = move || !state.with(|s| s.has_more()) && !searching();

    view! {
        <div class="w-full">
            {scope.searchable().then(|| view! { <FilterBar search=search filter=filter /> })}

            {move || error.get().map(|e| view! {
                <div class="mb-6"><ErrorDisplay error=e /></div>
            })}

            <Show
                when=move || !first_load()
                fallback=|| view! { <Loading message="Loading items..." /> }
            >
                <ItemGrid items=visible empty_message=scope.empty_message() />
            </Show>

            <Show when=move || loading.get() && !first_load()>
                <Loading message="Loading more..." />
            </Show>

            <Show when=show_load_more>
                <LoadMore on_load=Callback::new(move |()| load()) loading=loading />
            </Show>

            <Show when=show_end>
                <p class="text-center text-gray-500 mt-10">{scope.end_message()} " 🎉"</p>
            </Show>
        </div>
    }
}
