// web_app/pages/auth.rs - Login/signup and OTP verification pages

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::web_app::components::{AuthForm, OtpForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login - Bullwork Finder" />
        <div class="flex items-center justify-center min-h-screen bg-slate-100 font-sans">
            <AuthForm />
        </div>
    }
}

/// `/otp?email=...`; without an email there is nothing to verify
#[component]
pub fn OtpPage() -> impl IntoView {
    let query = use_query_map();
    let email = move || {
        query
            .with(|q| q.get("email"))
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
    };

    let navigate = use_navigate();
    Effect::new(move |_| {
        if email().is_none() {
            navigate("/login", Default::default());
        }
    });

    view! {
        <Title text="Verify OTP - Bullwork Finder" />
        <div class="flex items-center justify-center min-h-screen bg-slate-100 font-sans">
            {move || email().map(|email| view! { <OtpForm email=email /> })}
        </div>
    }
}
