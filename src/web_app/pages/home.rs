// web_app/pages/home.rs - Landing page
//
// Hero with the report/browse links, the most recent items, and a navigation
// bar whose "Your Items" and profile entries need a session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{check_auth, get_profile, logout, recent_items};

const HERO_IMAGE: &str =
    "https://t4.ftcdn.net/jpg/05/37/05/15/360_F_537051575_QMgTmcn9DVgwzPdboJHx6fqSge02BRzM.jpg";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = Resource::new(|| (), |_| check_auth());
    let recent = Resource::new(|| (), |_| recent_items());

    let logged_in = move || auth.get().and_then(|r| r.ok()).unwrap_or(false);

    view! {
        <Title text="Bullwork Finder" />
        <Meta name="description" content="The official internal Lost & Found app for Bullwork Mobility." />

        <main class="bg-gray-50 text-gray-900 min-h-screen">
            <Transition fallback=|| ()>
                <NavBar logged_in=Signal::derive(logged_in) on_logout=Callback::new(move |()| auth.refetch()) />
            </Transition>

            <section
                class="relative h-[70vh] flex items-center justify-center text-center p-4 bg-cover bg-center"
                style=format!("background-image: url('{}')", HERO_IMAGE)
            >
                <div class="absolute inset-0 bg-black opacity-50"></div>
                <div class="z-10 text-white">
                    <h1 class="text-4xl sm:text-5xl md:text-7xl font-extrabold tracking-tight mb-4 animate-fade-in-up">
                        "Find it. Report it. Recover it."
                    </h1>
                    <p class="text-lg sm:text-xl md:text-2xl max-w-2xl mx-auto mb-10 text-gray-200">
                        "The smart way to reunite lost items with their owners at Bullwork Mobility."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <a href="/lost" class="px-8 py-4 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-full shadow-lg">
                            "🔍 Lost Something?"
                        </a>
                        <a href="/found" class="px-8 py-4 bg-teal-500 hover:bg-teal-600 text-white font-semibold rounded-full shadow-lg">
                            "✋ Found an Item?"
                        </a>
                        <a href="/browse" class="px-8 py-4 bg-gray-200 hover:bg-gray-300 text-gray-800 font-semibold rounded-full shadow-lg">
                            "📦 Browse Items"
                        </a>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-white">
                <div class="container mx-auto px-6">
                    <div class="flex justify-between items-center mb-10">
                        <h2 class="text-3xl font-bold text-gray-800">"Recently Added Items"</h2>
                        <a href="/browse" class="text-teal-600 hover:underline font-semibold">"See More"</a>
                    </div>

                    <Suspense fallback=|| view! { <Loading message="Loading recent items..." /> }>
                        {move || recent.get().map(|result| match result {
                            Ok(items) if items.is_empty() => view! {
                                <p class="text-center text-gray-500 italic">"No items have been posted yet."</p>
                            }.into_any(),
                            Ok(items) => view! {
                                <div class="flex flex-wrap md:flex-nowrap gap-4 py-4 w-full justify-between overflow-x-auto">
                                    {items.into_iter().map(|item| view! { <RecentItemTile item=item /> }).collect_view()}
                                </div>
                            }.into_any(),
                            Err(_) => view! {
                                <div class="flex items-center justify-center min-h-[200px] text-red-500">
                                    "Failed to load recent items. Please try again later."
                                </div>
                            }.into_any(),
                        })}
                    </Suspense>
                </div>
            </section>

            <section class="py-20 bg-gray-100">
                <div class="container mx-auto px-6 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-12 text-gray-800">"How It Works"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                        <Step icon="📝" title="Report an Item"
                            text="If you've lost or found something, fill out a quick form with a description." />
                        <Step icon="🔎" title="Browse and Search"
                            text="Search every reported item by name or description and filter by lost or found." />
                        <Step icon="🤝" title="Get Reunited"
                            text="Use the contact details on a post to get the item back to its owner." />
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50 text-center">
                <div class="container mx-auto px-6">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4 text-gray-800">"Need Help?"</h2>
                    <p class="text-lg md:text-xl text-gray-600 max-w-3xl mx-auto mb-8">
                        "If you have questions or need assistance, our support team is here to help."
                    </p>
                    <a
                        href="mailto:support@bullworkmobility.com"
                        class="px-8 py-4 bg-teal-600 hover:bg-teal-700 text-white font-semibold rounded-full shadow-lg"
                    >
                        "Contact Support"
                    </a>
                </div>
            </section>
        </main>
    }
}

#[component]
fn Step(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <div class="text-6xl mb-4">{icon}</div>
            <h3 class="text-2xl font-semibold mb-2 text-gray-800">{title}</h3>
            <p class="text-gray-600">{text}</p>
        </div>
    }
}

/// Top bar: "Your Items", profile pop-up and logout
#[component]
fn NavBar(logged_in: Signal<bool>, on_logout: Callback<()>) -> impl IntoView {
    let show_profile = RwSignal::new(false);
    let profile = RwSignal::new(None::<Result<UserProfile, String>>);
    let navigate = use_navigate();

    let to_login = {
        let navigate = navigate.clone();
        move || navigate("/login", Default::default())
    };

    let on_your_items = {
        let to_login = to_login.clone();
        move |ev: leptos::ev::MouseEvent| {
            if !logged_in.get_untracked() {
                ev.prevent_default();
                to_login();
            }
        }
    };

    let on_profile = move |_| {
        if !logged_in.get_untracked() {
            to_login();
            return;
        }
        if show_profile.get_untracked() {
            show_profile.set(false);
            return;
        }

        show_profile.set(true);
        profile.set(None);
        spawn_local(async move {
            let result = get_profile().await.map_err(|e| {
                leptos::logging::warn!("profile fetch failed: {}", e);
                "Failed to load user data. Please log in again.".to_string()
            });
            profile.set(Some(result));
        });
    };

    let do_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = logout().await {
                leptos::logging::warn!("logout failed: {}", e);
            }
            show_profile.set(false);
            on_logout.run(());
        });
    };

    let link_class = "text-white hover:text-gray-300 transition-colors p-2 rounded-full hover:bg-white/20";

    view! {
        <nav class="fixed w-full z-20 top-0 left-0">
            <div class="container mx-auto flex justify-end items-center px-6 py-4 gap-4">
                <a href="/your-items" class=link_class on:click=on_your_items>"Your Items"</a>
                <button class=link_class title="Profile" on:click=on_profile>
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M5.121 17.804A13.937 13.937 0 0112 16c2.5 0 4.847.655 6.879 1.804M15 10a3 3 0 11-6 0 3 3 0 016 0zm6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                </button>
                <Show when=move || logged_in.get()>
                    <button class=link_class on:click=do_logout>"Log Out"</button>
                </Show>
            </div>
        </nav>

        <Show when=move || show_profile.get()>
            <ModalWrapper title="Profile" on_close=Callback::new(move |()| show_profile.set(false))>
                {move || match profile.get() {
                    None => view! { <Loading message="Loading profile..." /> }.into_any(),
                    Some(Err(e)) => view! { <div class="text-center text-red-500 py-4">{e}</div> }.into_any(),
                    Some(Ok(user)) => view! {
                        <div class="space-y-4">
                            <div>
                                <p class="text-gray-500 text-sm font-semibold">"Name"</p>
                                <p class="text-gray-800 text-lg">{user.name}</p>
                            </div>
                            <div>
                                <p class="text-gray-500 text-sm font-semibold">"Email"</p>
                                <p class="text-gray-800 text-lg">{user.email}</p>
                            </div>
                        </div>
                    }.into_any(),
                }}
            </ModalWrapper>
        </Show>
    }
}
