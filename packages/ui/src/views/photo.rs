use api::Attachment;
use dioxus::prelude::*;

use crate::attachment::{data_url, read_attachment};

/// File input that reads the picked image and shows a preview of it.
#[component]
pub fn PhotoPicker(
    id: String,
    label: String,
    value: Option<Attachment>,
    on_pick: EventHandler<Option<Attachment>>,
    #[props(default = "image/*".to_string())] accept: String,
) -> Element {
    let preview = value.as_ref().map(data_url);

    rsx! {
        div {
            class: "flex flex-col gap-2",
            label {
                r#for: "{id}",
                class: "cursor-pointer flex items-center justify-center gap-2 p-3 border-2 border-dashed border-gray-300 rounded-lg text-gray-500",
                "📷 {label}"
            }
            input {
                id: "{id}",
                class: "hidden",
                r#type: "file",
                accept: "{accept}",
                onchange: move |evt: FormEvent| async move {
                    on_pick.call(read_attachment(&evt).await);
                },
            }
            if let Some(src) = preview {
                img {
                    class: "w-full h-40 object-cover rounded-md",
                    src: "{src}",
                    alt: "Preview",
                }
            }
        }
    }
}

/// An image that swaps to `fallback` when its source fails to load.
/// With no fallback the broken image is hidden instead.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    class: String,
    #[props(default)] fallback: Option<String>,
) -> Element {
    // Remembers which source broke, so a new `src` is tried afresh
    let mut failed_src = use_signal(|| Option::<String>::None);
    let shown = shown_source(&src, failed_src.read().as_deref(), fallback.as_deref());

    rsx! {
        if let Some(shown) = shown {
            img {
                class: "{class}",
                src: "{shown}",
                alt: "{alt}",
                onerror: move |_| failed_src.set(Some(src.clone())),
            }
        }
    }
}

fn shown_source(src: &str, failed_src: Option<&str>, fallback: Option<&str>) -> Option<String> {
    if failed_src != Some(src) {
        return Some(src.to_string());
    }
    fallback.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_source_falls_back_or_hides() {
        assert_eq!(shown_source("a.png", None, None).as_deref(), Some("a.png"));
        assert_eq!(
            shown_source("a.png", Some("a.png"), Some("ph.png")).as_deref(),
            Some("ph.png")
        );
        assert_eq!(shown_source("a.png", Some("a.png"), None), None);
    }

    #[test]
    fn test_new_source_is_tried_after_failure() {
        assert_eq!(
            shown_source("b.png", Some("a.png"), Some("ph.png")).as_deref(),
            Some("b.png")
        );
    }
}
