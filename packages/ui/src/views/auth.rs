//! Login and registration screens.

use api::{Attachment, Registration};
use dioxus::prelude::*;

use crate::provider::use_app;
use crate::router::AuthScreen;

use super::PhotoPicker;

const GOV_ID_TYPES: [&str; 5] = ["Aadhaar Card", "Voter ID", "PAN Card", "Passport", "Driving License"];

const INPUT_CLASS: &str = "w-full p-3 border rounded-lg focus:outline-none focus:ring-2 focus:ring-orange-400";
const SUBMIT_CLASS: &str = "w-full bg-orange-500 text-white font-bold py-3 rounded-lg disabled:opacity-50";

#[component]
pub fn LoginScreen() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let mut gov_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = ctx.clone();
        spawn(async move {
            loading.set(true);
            ctx.workflows().login(gov_id().trim(), &password()).await;
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white p-6 rounded-xl shadow-md",
            h2 { class: "text-2xl font-bold text-gray-800 mb-6 text-center", "Login" }
            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_login,
                input {
                    class: INPUT_CLASS,
                    r#type: "text",
                    placeholder: "Government ID Number",
                    required: true,
                    value: gov_id(),
                    oninput: move |evt: FormEvent| gov_id.set(evt.value()),
                }
                input {
                    class: INPUT_CLASS,
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: SUBMIT_CLASS,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }
            p {
                class: "mt-6 text-sm text-center text-gray-600",
                "Don't have an account? "
                a {
                    class: "text-orange-600 font-semibold",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        state.write().router.show_auth_screen(AuthScreen::Registration);
                    },
                    "Register"
                }
            }
        }
    }
}

#[component]
pub fn RegistrationScreen() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let mut first_name = use_signal(String::new);
    let mut middle_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut gov_id_type = use_signal(|| GOV_ID_TYPES[0].to_string());
    let mut gov_id_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut photo = use_signal(|| Option::<Attachment>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = ctx.clone();
        let middle = middle_name().trim().to_string();
        let registration = Registration {
            first_name: first_name().trim().to_string(),
            middle_name: (!middle.is_empty()).then_some(middle),
            last_name: last_name().trim().to_string(),
            city: city().trim().to_string(),
            phone_number: phone_number().trim().to_string(),
            gov_id_type: gov_id_type(),
            gov_id_number: gov_id_number().trim().to_string(),
            password: password(),
            photo: photo(),
        };
        spawn(async move {
            loading.set(true);
            ctx.workflows().register(&registration).await;
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white p-6 rounded-xl shadow-md",
            h2 { class: "text-2xl font-bold text-gray-800 mb-6 text-center", "Create Account" }
            form {
                class: "flex flex-col gap-3",
                onsubmit: handle_register,
                PhotoPicker {
                    id: "photo-upload",
                    label: "Upload Profile Photo",
                    value: photo(),
                    on_pick: move |picked| photo.set(picked),
                }
                div {
                    class: "grid grid-cols-2 gap-3",
                    input {
                        class: INPUT_CLASS,
                        placeholder: "First Name",
                        required: true,
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                    input {
                        class: INPUT_CLASS,
                        placeholder: "Middle Name",
                        value: middle_name(),
                        oninput: move |evt: FormEvent| middle_name.set(evt.value()),
                    }
                }
                input {
                    class: INPUT_CLASS,
                    placeholder: "Last Name",
                    required: true,
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                input {
                    class: INPUT_CLASS,
                    placeholder: "City",
                    required: true,
                    value: city(),
                    oninput: move |evt: FormEvent| city.set(evt.value()),
                }
                input {
                    class: INPUT_CLASS,
                    r#type: "tel",
                    placeholder: "Phone Number",
                    required: true,
                    value: phone_number(),
                    oninput: move |evt: FormEvent| phone_number.set(evt.value()),
                }
                select {
                    class: INPUT_CLASS,
                    value: gov_id_type(),
                    onchange: move |evt: FormEvent| gov_id_type.set(evt.value()),
                    for id_type in GOV_ID_TYPES {
                        option { key: "{id_type}", value: id_type, {id_type} }
                    }
                }
                input {
                    class: INPUT_CLASS,
                    placeholder: "Government ID Number",
                    required: true,
                    value: gov_id_number(),
                    oninput: move |evt: FormEvent| gov_id_number.set(evt.value()),
                }
                input {
                    class: INPUT_CLASS,
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: SUBMIT_CLASS,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }
            p {
                class: "mt-6 text-sm text-center text-gray-600",
                "Already have an account? "
                a {
                    class: "text-orange-600 font-semibold",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        state.write().router.show_auth_screen(AuthScreen::Login);
                    },
                    "Login"
                }
            }
        }
    }
}
