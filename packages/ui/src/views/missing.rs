use api::Attachment;
use dioxus::prelude::*;

use crate::provider::{use_app, use_app_state, use_language};
use crate::render::{family_rows, missing_cards, EMPTY_REGISTRY};
use crate::router::{MissingTab, Page};
use crate::workflows::{MissingForm, Outcome};

use super::{FallbackImage, PhotoPicker};

const FIELD_CLASS: &str = "w-full p-2 border rounded-lg";

#[component]
pub fn MissingPage() -> Element {
    let mut state = use_app_state();
    let lang = use_language();
    let active = state.read().router.missing_tab();

    rsx! {
        div {
            h2 { class: "text-2xl font-bold text-gray-800 mb-4", {lang.text("missingPersonsTitle")} }
            div {
                class: "flex border-b mb-4",
                for tab in MissingTab::ALL {
                    button {
                        key: "{tab:?}",
                        class: if tab == active { "flex-1 py-2 text-sm font-semibold border-b-2 text-orange-600 border-orange-500" } else { "flex-1 py-2 text-sm font-semibold border-b-2 text-gray-500 border-transparent" },
                        onclick: move |_| state.write().router.select_missing_tab(tab),
                        {lang.text(tab.label_key())}
                    }
                }
            }
            {match active {
                MissingTab::SearchRegistry => rsx! { SearchRegistry {} },
                MissingTab::ReportMissing => rsx! { ReportMissing {} },
                MissingTab::FamilyStatus => rsx! { FamilyStatusList {} },
            }}
        }
    }
}

#[component]
fn SearchRegistry() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let placeholder = ctx.placeholder_image().to_string();
    let filter = state.read().missing_filter.clone();
    let cards = missing_cards(&state.read().filtered_missing(), &placeholder);

    rsx! {
        div {
            input {
                class: "w-full p-3 border rounded-lg mb-4",
                r#type: "search",
                placeholder: "Search by name...",
                value: filter,
                oninput: move |evt: FormEvent| state.write().set_missing_filter(evt.value()),
            }
            div {
                class: "flex flex-col gap-3",
                if cards.is_empty() {
                    p { class: "text-center text-gray-500", "{EMPTY_REGISTRY}" }
                }
                for (index, card) in cards.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "bg-gray-50 p-4 rounded-lg flex items-center space-x-4 border",
                        FallbackImage {
                            src: card.photo_url.clone(),
                            alt: "Missing Person",
                            class: "w-20 h-20 rounded-md object-cover bg-gray-300",
                            fallback: placeholder.clone(),
                        }
                        div {
                            h4 { class: "font-bold text-gray-800", "{card.name}" }
                            p { class: "text-sm text-gray-600", "{card.details}" }
                            p { class: "text-sm text-gray-600", "{card.description}" }
                            p { class: "text-xs mt-1 text-gray-500", "{card.contact}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportMissing() -> Element {
    let ctx = use_app();
    let lang = use_language();
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut last_seen = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut photo = use_signal(|| Option::<Attachment>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = MissingForm {
            name: name().trim().to_string(),
            age: age(),
            last_seen_location: last_seen().trim().to_string(),
            description: description().trim().to_string(),
            reporter_contact: contact().trim().to_string(),
            photo: photo(),
        };
        let ctx = ctx.clone();
        spawn(async move {
            submitting.set(true);
            if ctx.workflows().report_missing(form).await == Outcome::Completed {
                name.set(String::new());
                age.set(String::new());
                last_seen.set(String::new());
                description.set(String::new());
                contact.set(String::new());
                photo.set(None);
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-3",
            onsubmit: handle_submit,
            input {
                class: FIELD_CLASS,
                placeholder: "Full Name",
                required: true,
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                class: FIELD_CLASS,
                r#type: "number",
                min: "0",
                placeholder: "Age",
                required: true,
                value: age(),
                oninput: move |evt: FormEvent| age.set(evt.value()),
            }
            input {
                class: FIELD_CLASS,
                placeholder: "Last Seen Location",
                required: true,
                value: last_seen(),
                oninput: move |evt: FormEvent| last_seen.set(evt.value()),
            }
            textarea {
                class: FIELD_CLASS,
                rows: "3",
                placeholder: "Description (clothing, features...)",
                required: true,
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            input {
                class: FIELD_CLASS,
                r#type: "tel",
                placeholder: "Your Contact Number",
                required: true,
                value: contact(),
                oninput: move |evt: FormEvent| contact.set(evt.value()),
            }
            PhotoPicker {
                id: "missingPhoto",
                label: lang.text("attachPhoto").to_string(),
                value: photo(),
                on_pick: move |picked| photo.set(picked),
            }
            button {
                class: "w-full bg-orange-500 text-white font-bold py-3 rounded-lg disabled:opacity-50",
                r#type: "submit",
                disabled: submitting(),
                {lang.text("submitReport")}
            }
        }
    }
}

#[component]
fn FamilyStatusList() -> Element {
    let mut state = use_app_state();
    let lang = use_language();
    let rows = family_rows(&state.read().family_members);

    rsx! {
        div {
            class: "flex flex-col gap-3",
            for (index, row) in rows.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "bg-gray-50 p-3 rounded-lg flex justify-between items-center border",
                    span { class: "font-medium text-gray-700", "{row.name}" }
                    span { class: "text-xs font-semibold px-2.5 py-1 rounded-full {row.badge_class}", "{row.status}" }
                }
            }
            button {
                class: "w-full mt-2 border-2 border-dashed border-orange-400 text-orange-600 font-semibold py-2 rounded-lg",
                onclick: move |_| state.write().router.show_page(Page::AddFamilyMember),
                "+ "
                {lang.text("addFamilyTitle")}
            }
        }
    }
}
