use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::provider::{use_app, use_language};
use crate::router::Page;
use crate::workflows::Outcome;

#[component]
pub fn AddFamilyMemberPage() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let lang = use_language();
    let mut name = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if ctx.workflows().add_family_member(&name()) == Outcome::Completed {
            name.set(String::new());
        }
    };

    rsx! {
        div {
            button {
                class: "flex items-center gap-2 text-gray-600 mb-4",
                onclick: move |_| state.write().router.show_page(Page::Missing),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                {lang.text("navMissing")}
            }
            h2 { class: "text-2xl font-bold text-gray-800 mb-4", {lang.text("addFamilyTitle")} }
            form {
                class: "flex flex-col gap-3",
                onsubmit: handle_submit,
                input {
                    class: "w-full p-3 border rounded-lg",
                    placeholder: lang.text("newMemberNamePlaceholder"),
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    class: "w-full bg-orange-500 text-white font-bold py-3 rounded-lg",
                    r#type: "submit",
                    {lang.text("addMemberBtn")}
                }
            }
        }
    }
}
