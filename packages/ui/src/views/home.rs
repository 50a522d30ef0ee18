use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaTriangleExclamation};
use dioxus_free_icons::Icon;

use crate::provider::{use_app, use_language};
use crate::render::LocationPanel;
use crate::router::Page;

#[component]
pub fn HomePage() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let lang = use_language();
    let panel = LocationPanel::from(state.read().location);

    let sos_ctx = ctx.clone();
    let on_sos = move |_| {
        let ctx = sos_ctx.clone();
        spawn(async move {
            ctx.workflows().send_sos().await;
        });
    };
    let on_safe = move |_| {
        let ctx = ctx.clone();
        spawn(async move {
            ctx.workflows().mark_safe().await;
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-6",
            div {
                class: "bg-white p-4 rounded-xl shadow-sm",
                div {
                    class: "flex items-center gap-2 text-gray-700 font-semibold",
                    Icon { icon: FaLocationDot, width: 16, height: 16 }
                    {lang.text("yourLocation")}
                }
                p { class: "mt-1 text-gray-800", "{panel.location}" }
                if !panel.risks.is_empty() {
                    p {
                        class: "mt-2 text-sm text-red-600",
                        span { class: "font-semibold", {lang.text("potentialRisks")} }
                        " {panel.risks}"
                    }
                }
            }
            div {
                class: "flex justify-center",
                button {
                    class: "w-44 h-44 rounded-full bg-red-600 text-white text-4xl font-extrabold shadow-xl active:scale-95",
                    onclick: on_sos,
                    {lang.text("sos")}
                }
            }
            button {
                class: "w-full bg-green-500 text-white font-bold py-3 rounded-lg flex justify-center gap-1",
                onclick: on_safe,
                span { {lang.text("markMe")} }
                span { {lang.text("safe")} }
            }
            button {
                class: "w-full bg-white border border-orange-400 text-orange-600 font-semibold py-3 rounded-lg flex items-center justify-center gap-2",
                onclick: move |_| state.write().router.show_page(Page::ReportIncident),
                Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
                {lang.text("reportIncident")}
            }
        }
    }
}
