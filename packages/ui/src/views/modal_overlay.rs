use dioxus::prelude::*;

/// Dimmed backdrop with a centred card.
///
/// A backdrop click reports `on_backdrop` only for dismissible dialogs;
/// notices stay up until their button is pressed.
#[component]
pub fn ModalOverlay(
    #[props(default = true)] dismissible: bool,
    on_backdrop: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4",
            onclick: move |_| {
                if dismissible {
                    on_backdrop.call(());
                }
            },
            div {
                class: "bg-white rounded-xl shadow-xl max-w-sm w-full",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
