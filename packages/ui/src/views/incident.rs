use api::Attachment;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::provider::{use_app, use_language};
use crate::router::Page;
use crate::workflows::{IncidentForm, Outcome};

use super::PhotoPicker;

const INCIDENT_TYPES: [&str; 5] = ["Flood", "Fire", "Building Collapse", "Road Accident", "Other"];

const FIELD_CLASS: &str = "w-full p-3 border rounded-lg";

#[component]
pub fn ReportIncidentPage() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let lang = use_language();
    let mut incident_type = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut image = use_signal(|| Option::<Attachment>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = IncidentForm {
            incident_type: incident_type(),
            description: description().trim().to_string(),
            location: location().trim().to_string(),
            image: image(),
        };
        let ctx = ctx.clone();
        spawn(async move {
            submitting.set(true);
            if ctx.workflows().report_incident(form).await == Outcome::Completed {
                incident_type.set(String::new());
                description.set(String::new());
                location.set(String::new());
                image.set(None);
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            button {
                class: "flex items-center gap-2 text-gray-600 mb-4",
                onclick: move |_| state.write().router.show_page(Page::Home),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                {lang.text("navHome")}
            }
            h2 { class: "text-2xl font-bold text-gray-800 mb-4", {lang.text("reportIncidentTitle")} }
            form {
                class: "flex flex-col gap-3",
                onsubmit: handle_submit,
                select {
                    class: FIELD_CLASS,
                    required: true,
                    value: incident_type(),
                    onchange: move |evt: FormEvent| incident_type.set(evt.value()),
                    option { value: "", disabled: true, {lang.text("incidentType")} }
                    for t in INCIDENT_TYPES {
                        option { key: "{t}", value: t, {t} }
                    }
                }
                textarea {
                    class: FIELD_CLASS,
                    rows: "4",
                    placeholder: lang.text("incidentDescription"),
                    required: true,
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                input {
                    class: FIELD_CLASS,
                    placeholder: lang.text("incidentLocation"),
                    required: true,
                    value: location(),
                    oninput: move |evt: FormEvent| location.set(evt.value()),
                }
                PhotoPicker {
                    id: "incidentPhoto",
                    label: lang.text("attachPhoto").to_string(),
                    value: image(),
                    on_pick: move |picked| image.set(picked),
                }
                button {
                    class: "w-full bg-red-600 text-white font-bold py-3 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting(),
                    {lang.text("submitIncident")}
                }
            }
        }
    }
}
