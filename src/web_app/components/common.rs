// web_app/components/common.rs - Reusable UI components
//
// Small, mostly stateless building blocks shared by every page.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::ItemType;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-teal-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Outcome line shown above a form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "p-4 rounded-lg text-sm bg-green-100 text-green-700 shadow-md",
            Notice::Error(_) => "p-4 rounded-lg text-sm bg-red-100 text-red-700 shadow-md",
        }
    }
}

/// Renders the current notice, if any
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! { <div class=n.class()>{n.text().to_string()}</div> }
        })
    }
}

/// Text a user should see for a failed server function call.
///
/// Service messages travel as `ServerError` and are shown verbatim; transport
/// failures between browser and server get a generic line.
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        ServerFnError::Request(_) | ServerFnError::Response(_) => {
            "Network error. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-teal-500 text-white rounded-lg hover:bg-teal-600 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-semibold shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides the backdrop and header. Visibility is up to the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-start justify-end p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/40 transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-lg shadow-xl w-72 mt-12 flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-3 border-b border-gray-100">
                    <h2 class="text-lg font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-700 rounded-full p-1 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

fn badge_class(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Lost => "px-3 py-1 rounded-full text-sm font-bold shadow-md text-white bg-red-500",
        ItemType::Found => "px-3 py-1 rounded-full text-sm font-bold shadow-md text-white bg-teal-500",
    }
}

/// "Lost Item" / "Found Item" badge
#[component]
pub fn TypeBadge(item_type: ItemType) -> impl IntoView {
    view! {
        <span class=badge_class(item_type)>
            {item_type.badge_label()}
        </span>
    }
}

/// Text input component
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 rounded-lg border-2 border-gray-300 \
                      focus:outline-none focus:border-teal-500 transition-colors";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Multi-line variant of [`TextInput`]
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <textarea
            placeholder=placeholder
            rows=rows
            required=true
            class="w-full px-4 py-2 rounded-lg border-2 border-gray-300 focus:outline-none focus:border-teal-500 transition-colors"
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        ></textarea>
    }
}
