use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaHouse, FaMagnifyingGlass, FaUsers};
use dioxus_free_icons::Icon;

use crate::provider::{use_app_state, use_language};
use crate::router::Page;

/// Bottom navigation between the four main pages.
#[component]
pub fn Navbar() -> Element {
    let mut state = use_app_state();
    let lang = use_language();
    let current = state.read().router.page();

    rsx! {
        nav {
            class: "fixed bottom-0 inset-x-0 max-w-md mx-auto bg-orange-500 flex justify-around py-2",
            for page in Page::NAV {
                button {
                    key: "{page:?}",
                    class: if page == current { "flex flex-col items-center text-white" } else { "flex flex-col items-center text-orange-200" },
                    onclick: move |_| state.write().router.show_page(page),
                    {match page {
                        Page::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
                        Page::Alerts => rsx! { Icon { icon: FaBell, width: 20, height: 20 } },
                        Page::Community => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
                        _ => rsx! { Icon { icon: FaMagnifyingGlass, width: 20, height: 20 } },
                    }}
                    span { class: "text-xs mt-1", {lang.text(page.nav_key())} }
                }
            }
        }
    }
}
