// web_app/components/forms.rs - Report, login/signup and OTP forms
//
// Each form keeps its fields in signals, validates locally, then calls the
// matching server function and reports the outcome through a Notice.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::{KeyboardEvent, SubmitEvent};
use leptos_router::hooks::use_navigate;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::web_app::model::*;
use crate::web_app::server_fns::{login, register, submit_report, verify_otp};
use super::common::*;

/// Wording that differs between the lost and found forms
struct ReportCopy {
    title: &'static str,
    subtitle: &'static str,
    name_hint: &'static str,
    description_hint: &'static str,
    location_label: &'static str,
    location_hint: &'static str,
    contact_hint: &'static str,
    submit: &'static str,
}

fn report_copy(item_type: ItemType) -> ReportCopy {
    match item_type {
        ItemType::Lost => ReportCopy {
            title: "Report a Lost Item",
            subtitle: "Please fill out the form below with the details of the item you have lost.",
            name_hint: "e.g., Car Keys, Company Laptop",
            description_hint: "e.g., Silver watch with a leather band. Last seen on my desk.",
            location_label: "Last Seen Location",
            location_hint: "e.g., Cafeteria, Meeting Room C",
            contact_hint: "e.g., john.doe@bullwork.com",
            submit: "Submit Lost Item",
        },
        ItemType::Found => ReportCopy {
            title: "Report a Found Item",
            subtitle: "Please fill out the form below with the details of the item you found.",
            name_hint: "e.g., Red Coffee Mug, Car Keys",
            description_hint: "e.g., Found a red mug with a black lid near the water cooler.",
            location_label: "Location Found",
            location_hint: "e.g., Employee Parking Lot, Lobby",
            contact_hint: "e.g., jane.smith@bullwork.com",
            submit: "Submit Found Item",
        },
    }
}

/// Lost/found report form; navigates home once the service accepts it
#[component]
pub fn ReportForm(item_type: ItemType) -> impl IntoView {
    let copy = report_copy(item_type);
    let item_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let submitting = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let report = ReportItem {
            item_name: item_name.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            contact: contact.get_untracked(),
            ..ReportItem::new(item_type)
        };
        if let Err(e) = report.validate() {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }

        submitting.set(true);
        notice.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match submit_report(report).await {
                Ok(message) => {
                    notice.set(Some(Notice::Success(message)));
                    navigate("/", Default::default());
                }
                Err(e) => {
                    submitting.set(false);
                    notice.set(Some(Notice::Error(server_error_message(&e))));
                }
            }
        });
    };

    view! {
        <div class="w-full max-w-xl mx-auto bg-white rounded-2xl shadow-xl p-8">
            <h1 class="text-3xl font-bold text-center text-gray-800 mb-2">{copy.title}</h1>
            <p class="text-center text-gray-600 mb-8">{copy.subtitle}</p>
            <NoticeBanner notice=notice />

            <form on:submit=on_submit class="space-y-6 mt-4">
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Item Name"</span>
                    <TextInput value=item_name placeholder=copy.name_hint required=true />
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Description"</span>
                    <TextArea value=description placeholder=copy.description_hint />
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">{copy.location_label}</span>
                    <TextInput value=location placeholder=copy.location_hint required=true />
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Contact Info (Email/Phone)"</span>
                    <TextInput value=contact placeholder=copy.contact_hint />
                </label>

                <Button button_type="submit" disabled=submitting class="w-full py-3 rounded-full">
                    {move || if submitting.get() { "Submitting..." } else { copy.submit }}
                </Button>
                <a href="/" class="block text-center text-sm font-medium text-gray-500 hover:underline">
                    "Cancel and go back to home"
                </a>
            </form>
        </div>
    }
}

/// Where login sends the user to type the mailed code
pub fn otp_path(email: &str) -> String {
    format!("/otp?email={}", utf8_percent_encode(email.trim(), NON_ALPHANUMERIC))
}

/// Login / signup form with a mode toggle
#[component]
pub fn AuthForm() -> impl IntoView {
    let is_login = RwSignal::new(true);
    let name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let submitting = RwSignal::new(false);
    let navigate = use_navigate();

    let set_mode = move |login_mode: bool| {
        is_login.set(login_mode);
        notice.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        notice.set(None);

        let navigate = navigate.clone();
        if is_login.get_untracked() {
            let address = email.get_untracked();
            spawn_local(async move {
                match login(address.clone()).await {
                    Ok(message) => {
                        notice.set(Some(Notice::Success(message)));
                        navigate(&otp_path(&address), Default::default());
                    }
                    Err(e) => notice.set(Some(Notice::Error(server_error_message(&e)))),
                }
                submitting.set(false);
            });
        } else {
            let form = RegisterRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                phone_number: phone_number.get_untracked(),
                password: password.get_untracked(),
            };
            spawn_local(async move {
                match register(form).await {
                    Ok(_) => {
                        notice.set(Some(Notice::Success(
                            "Registration successful. Please log in to continue.".to_string(),
                        )));
                        is_login.set(true);
                    }
                    Err(e) => notice.set(Some(Notice::Error(server_error_message(&e)))),
                }
                submitting.set(false);
            });
        }
    };

    let tab_class = move |login_tab: bool| {
        if is_login.get() == login_tab {
            "flex-1 py-2 rounded-full font-medium bg-teal-500 text-white shadow-md"
        } else {
            "flex-1 py-2 rounded-full font-medium text-gray-600"
        }
    };

    view! {
        <div class="w-full max-w-lg p-8 space-y-6 bg-white rounded-xl shadow-2xl">
            <div class="flex justify-center mb-6">
                <a href="/" class="text-3xl font-bold text-gray-800">"Bullwork Finder"</a>
            </div>
            <NoticeBanner notice=notice />
            <h2 class="text-2xl font-semibold text-center text-gray-800">
                {move || if is_login.get() { "Login to your account" } else { "Create a new account" }}
            </h2>

            <div class="flex bg-gray-200 p-1 rounded-full text-sm">
                <button type="button" class=move || tab_class(true) on:click=move |_| set_mode(true)>
                    "Login"
                </button>
                <button type="button" class=move || tab_class(false) on:click=move |_| set_mode(false)>
                    "Signup"
                </button>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <Show when=move || !is_login.get()>
                    <TextInput value=name placeholder="Name" required=true />
                    <TextInput value=phone_number placeholder="Phone Number" input_type="tel" required=true />
                </Show>
                <TextInput value=email placeholder="Email Address" input_type="email" required=true />
                <Show when=move || !is_login.get()>
                    <TextInput value=password placeholder="Password" input_type="password" required=true />
                </Show>

                <Button button_type="submit" disabled=submitting class="w-full">
                    {move || if is_login.get() { "Log In" } else { "Sign Up" }}
                </Button>
            </form>

            <p class="text-center text-sm text-gray-600">
                {move || if is_login.get() { "Not a member? " } else { "Already a member? " }}
                <a
                    class="text-teal-600 font-medium hover:underline cursor-pointer"
                    on:click=move |_| set_mode(!is_login.get_untracked())
                >
                    {move || if is_login.get() { "Signup now" } else { "Login now" }}
                </a>
            </p>
        </div>
    }
}

/// Six single-digit cells; focus follows typing and backspace
#[component]
pub fn OtpInput(entry: RwSignal<OtpEntry>) -> impl IntoView {
    let cells: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    let focus = move |index: usize| {
        if let Some(input) = cells[index].get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex justify-center space-x-2">
            {(0..OTP_LENGTH).map(move |index| view! {
                <input
                    node_ref=cells[index]
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    class="w-12 h-12 text-center text-xl font-semibold border-2 border-gray-300 rounded-lg focus:outline-none focus:border-teal-500 transition-colors"
                    prop:value=move || entry.with(|e| e.cell(index))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let next = entry.try_update(|e| e.input(index, &value)).flatten();
                        if let Some(next) = next {
                            focus(next);
                        }
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Backspace" {
                            if let Some(prev) = entry.with_untracked(|e| e.backspace(index)) {
                                focus(prev);
                            }
                        }
                    }
                    on:focus=move |_| {
                        if let Some(input) = cells[index].get() {
                            input.select();
                        }
                    }
                />
            }).collect_view()}
        </div>
    }
}

/// OTP entry plus the verify button; navigates home once verified
#[component]
pub fn OtpForm(email: String) -> impl IntoView {
    let entry = RwSignal::new(OtpEntry::default());
    let notice = RwSignal::new(None::<Notice>);
    let verifying = RwSignal::new(false);
    let navigate = use_navigate();
    let shown_email = email.clone();

    let can_verify = Signal::derive(move || !verifying.get() && entry.with(|e| e.code().is_some()));

    let on_verify = move |_| {
        let Some(code) = entry.with_untracked(|e| e.code()) else {
            return;
        };
        verifying.set(true);
        notice.set(None);

        let email = email.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match verify_otp(email, code).await {
                Ok(message) => {
                    notice.set(Some(Notice::Success(message)));
                    navigate("/", Default::default());
                }
                Err(e) => {
                    verifying.set(false);
                    notice.set(Some(Notice::Error(server_error_message(&e))));
                }
            }
        });
    };

    view! {
        <div class="w-full max-w-sm p-8 space-y-6 bg-white rounded-xl shadow-2xl">
            <a href="/login" class="flex items-center gap-2 text-teal-600 hover:underline mb-4">"← Back"</a>
            <h2 class="text-2xl font-bold text-center text-gray-800">"Verify OTP"</h2>
            <p class="text-center text-sm text-gray-600">
                "An OTP has been sent to " <strong>{shown_email}</strong> "."
            </p>
            <NoticeBanner notice=notice />
            <div class="flex flex-col items-center space-y-4">
                <OtpInput entry=entry />
                <button
                    type="button"
                    class="w-full py-2 px-4 rounded-lg bg-green-600 text-white font-semibold hover:bg-green-700 transition-colors disabled:opacity-50"
                    disabled=move || !can_verify.get()
                    on:click=on_verify
                >
                    {move || if verifying.get() { "Verifying..." } else { "Verify & Log In" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_copy_differs_by_type() {
        let lost = report_copy(ItemType::Lost);
        let found = report_copy(ItemType::Found);
        assert_eq!(lost.title, "Report a Lost Item");
        assert_eq!(found.title, "Report a Found Item");
        assert_eq!(lost.location_label, "Last Seen Location");
        assert_eq!(found.location_label, "Location Found");
        assert_ne!(lost.submit, found.submit);
    }

    #[test]
    fn test_otp_path_escapes_email() {
        assert_eq!(otp_path("jane@bullwork.com"), "/otp?email=jane%40bullwork%2Ecom");
        assert_eq!(otp_path(" a+b@x.io "), "/otp?email=a%2Bb%40x%2Eio");
    }

    #[test]
    fn test_otp_path_keeps_query_intact() {
        let path = otp_path("odd&name#1?@x.io");
        assert_eq!(path, "/otp?email=odd%26name%231%3F%40x%2Eio");
        assert_eq!(path.matches('?').count(), 1);
        assert!(!path.contains('#'));
    }
}
