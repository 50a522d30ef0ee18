use dioxus::prelude::*;

use crate::dialog::DialogOverlay;
use crate::i18n::Language;
use crate::navbar::Navbar;
use crate::provider::{use_app_state, use_language};
use crate::router::{AuthScreen, Container, Page};

use super::{
    AddFamilyMemberPage, AlertsPage, CommunityPage, HomePage, LoginScreen, MissingPage,
    RegistrationScreen, ReportIncidentPage,
};

/// Root layout: header, the auth or app container, and the dialog layer.
#[component]
pub fn AppShell() -> Element {
    let state = use_app_state();
    let router = state.read().router;

    rsx! {
        div {
            class: "max-w-md mx-auto min-h-screen bg-gray-50 flex flex-col",
            Header {}
            {match router.container() {
                Container::Auth => rsx! {
                    main {
                        class: "flex-1 p-4",
                        {match router.auth_screen() {
                            AuthScreen::Login => rsx! { LoginScreen {} },
                            AuthScreen::Registration => rsx! { RegistrationScreen {} },
                        }}
                    }
                },
                Container::App => rsx! {
                    main {
                        class: "flex-1 p-4 pb-24",
                        {match router.page() {
                            Page::Home => rsx! { HomePage {} },
                            Page::Alerts => rsx! { AlertsPage {} },
                            Page::Community => rsx! { CommunityPage {} },
                            Page::Missing => rsx! { MissingPage {} },
                            Page::ReportIncident => rsx! { ReportIncidentPage {} },
                            Page::AddFamilyMember => rsx! { AddFamilyMemberPage {} },
                        }}
                    }
                    Navbar {}
                },
            }}
        }
        DialogOverlay {}
    }
}

#[component]
fn Header() -> Element {
    let mut state = use_app_state();
    let lang = use_language();

    rsx! {
        header {
            class: "bg-orange-500 text-white p-4 flex justify-between items-center shadow",
            div {
                h1 { class: "text-xl font-bold", {lang.text("appName")} }
                p { class: "text-xs text-orange-100", {lang.text("appSubtitle")} }
            }
            select {
                class: "bg-orange-600 text-white text-sm rounded px-2 py-1 border-none outline-none",
                value: lang.code(),
                onchange: move |evt: FormEvent| {
                    match Language::from_code(&evt.value()) {
                        Some(lang) => state.write().set_language(lang),
                        None => tracing::warn!("Unknown language code {}", evt.value()),
                    }
                },
                for option_lang in Language::ALL {
                    option {
                        key: "{option_lang.code()}",
                        value: option_lang.code(),
                        {option_lang.native_name()}
                    }
                }
            }
        }
    }
}
