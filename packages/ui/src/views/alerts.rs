use dioxus::prelude::*;

use crate::provider::{use_app_state, use_language};
use crate::render::{sos_calls, EMPTY_SOS};
use crate::router::AlertsTab;

/// Standing advisories shown under "Announcements".
const ANNOUNCEMENTS: [(&str, &str); 2] = [
    (
        "Flood Warning",
        "Heavy rainfall expected in the next 48 hours. Move to higher ground if you live in low-lying areas.",
    ),
    (
        "Relief Camp Open",
        "A relief camp is operating at the Government School. Food, water and first aid are available.",
    ),
];

#[component]
pub fn AlertsPage() -> Element {
    let mut state = use_app_state();
    let lang = use_language();
    let active = state.read().router.alerts_tab();

    rsx! {
        div {
            h2 { class: "text-2xl font-bold text-gray-800 mb-4", {lang.text("alertsTitle")} }
            div {
                class: "flex border-b mb-4",
                for tab in AlertsTab::ALL {
                    button {
                        key: "{tab:?}",
                        class: if tab == active { "flex-1 py-2 font-semibold border-b-2 text-orange-600 border-orange-500" } else { "flex-1 py-2 font-semibold border-b-2 text-gray-500 border-transparent" },
                        onclick: move |_| state.write().router.select_alerts_tab(tab),
                        {lang.text(tab.label_key())}
                    }
                }
            }
            {match active {
                AlertsTab::Announcements => rsx! { Announcements {} },
                AlertsTab::NearbySos => rsx! { NearbySos {} },
            }}
        }
    }
}

#[component]
fn Announcements() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-3",
            for (title, body) in ANNOUNCEMENTS {
                div {
                    key: "{title}",
                    class: "bg-yellow-50 border-l-4 border-yellow-400 p-4 rounded",
                    h3 { class: "font-bold text-yellow-800", "{title}" }
                    p { class: "text-sm text-yellow-700", "{body}" }
                }
            }
        }
    }
}

#[component]
fn NearbySos() -> Element {
    let state = use_app_state();
    let calls: Vec<_> = sos_calls(&state.read().sos_calls)
        .into_iter()
        .enumerate()
        .map(|(index, call)| (call.id.clone().unwrap_or_else(|| index.to_string()), call))
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-3",
            if calls.is_empty() {
                p { class: "text-center text-gray-500", "{EMPTY_SOS}" }
            }
            for (key, call) in calls {
                div {
                    key: "{key}",
                    class: "bg-red-50 border border-red-200 p-4 rounded-lg flex justify-between items-center",
                    div {
                        p { class: "font-bold text-red-800", "{call.name}" }
                        p { class: "text-sm text-red-700", "{call.location}" }
                        p { class: "text-xs text-red-500", "{call.emergency_type}" }
                    }
                    div {
                        class: "text-right",
                        p { class: "text-sm font-semibold text-red-800", "{call.time}" }
                        a {
                            class: "text-xs text-orange-600 font-bold hover:underline",
                            href: "https://www.google.com/maps?q={call.latitude},{call.longitude}",
                            target: "_blank",
                            "VIEW MAP"
                        }
                    }
                }
            }
        }
    }
}
