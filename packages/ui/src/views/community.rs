use api::Attachment;
use dioxus::prelude::*;

use crate::provider::{use_app, use_language};
use crate::render::{feed_cards, FeedCard, IncidentCard, PostCard, EMPTY_FEED};
use crate::workflows::PostForm;

use super::{FallbackImage, PhotoPicker};

const POST_CATEGORIES: [&str; 5] = ["Food", "Water", "Medical", "Rescue", "Volunteer"];

#[component]
pub fn CommunityPage() -> Element {
    let ctx = use_app();
    let lang = use_language();
    let mut show_form = use_signal(|| false);
    let mut category = use_signal(|| POST_CATEGORIES[0].to_string());
    let mut message = use_signal(String::new);
    let mut image = use_signal(|| Option::<Attachment>::None);
    let cards = feed_cards(&ctx.state.read().community_posts);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = PostForm {
            category: category(),
            message: message().trim().to_string(),
            image: image(),
        };
        if form.message.is_empty() {
            return;
        }
        message.set(String::new());
        image.set(None);
        show_form.set(false);
        let ctx = ctx.clone();
        spawn(async move {
            ctx.workflows().create_post(form).await;
        });
    };

    rsx! {
        div {
            div {
                class: "flex justify-between items-center mb-4",
                h2 { class: "text-2xl font-bold text-gray-800", {lang.text("communityTitle")} }
                button {
                    class: "bg-orange-500 text-white text-sm font-semibold px-3 py-1.5 rounded-lg",
                    onclick: move |_| show_form.toggle(),
                    {lang.text("newPost")}
                }
            }
            if show_form() {
                form {
                    class: "bg-white p-4 rounded-lg shadow-sm mb-4 flex flex-col gap-3",
                    onsubmit: handle_submit,
                    select {
                        class: "w-full p-2 border rounded-lg",
                        value: category(),
                        onchange: move |evt: FormEvent| category.set(evt.value()),
                        for c in POST_CATEGORIES {
                            option { key: "{c}", value: c, {c} }
                        }
                    }
                    textarea {
                        class: "w-full p-2 border rounded-lg",
                        rows: "3",
                        placeholder: "What do you need or offer?",
                        required: true,
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                    PhotoPicker {
                        id: "postImage",
                        label: lang.text("attachPhoto").to_string(),
                        value: image(),
                        on_pick: move |picked| image.set(picked),
                    }
                    button {
                        class: "w-full bg-orange-500 text-white font-bold py-2 rounded-lg",
                        r#type: "submit",
                        {lang.text("submitPost")}
                    }
                }
            }
            div {
                class: "flex flex-col gap-3",
                if cards.is_empty() {
                    p { class: "text-center text-gray-500", "{EMPTY_FEED}" }
                }
                for (index, card) in cards.into_iter().enumerate() {
                    {match card {
                        FeedCard::Incident(card) => rsx! { IncidentItem { key: "{index}", card } },
                        FeedCard::Post(card) => rsx! { PostItem { key: "{index}", card } },
                    }}
                }
            }
        }
    }
}

#[component]
fn IncidentItem(card: IncidentCard) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 p-3 rounded-lg",
            div {
                class: "flex justify-between items-center mb-1",
                span { class: "text-xs font-semibold px-2 py-0.5 rounded-full bg-red-100 text-red-800", "{card.badge}" }
                span { class: "text-xs text-gray-400", "{card.time}" }
            }
            p { class: "text-gray-700 font-medium", "{card.message}" }
            p { class: "text-xs text-gray-600 mt-1", "📍 {card.location}" }
            p { class: "text-xs text-red-600 mt-1", "{card.status}" }
            if let Some(src) = card.image_url.clone() {
                FallbackImage {
                    src,
                    alt: "Incident Evidence",
                    class: "mt-2 w-full h-32 object-cover rounded-md",
                }
            }
            p { class: "text-xs text-gray-500 mt-2", "🏛️ {card.reporter}" }
        }
    }
}

#[component]
fn PostItem(card: PostCard) -> Element {
    rsx! {
        div {
            class: "bg-white border p-3 rounded-lg",
            div {
                class: "flex justify-between items-center mb-1",
                span { class: "text-xs font-semibold px-2 py-0.5 rounded-full {card.badge_class}", "{card.category}" }
                span { class: "text-xs text-gray-400", "{card.time}" }
            }
            p { class: "text-gray-700", "{card.message}" }
            p { class: "text-xs text-gray-500 mt-1", "📍 {card.location}" }
            if let Some(src) = card.image_url.clone() {
                FallbackImage {
                    src,
                    alt: "Post Image",
                    class: "mt-2 w-full h-32 object-cover rounded-md",
                }
            }
            p { class: "text-xs text-gray-500 mt-1", "👤 {card.author}" }
        }
    }
}
