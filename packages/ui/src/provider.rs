//! App-wide context: backend, state, dialogs, geolocation.

use std::cell::Cell;
use std::rc::Rc;

use api::{Backend, ReqwestTransport};
use dioxus::prelude::*;
use store::{AppConfig, PlatformStore};

use crate::dialog::{DialogHost, PendingDialog};
use crate::geo::BrowserGeolocator;
use crate::i18n::Language;
use crate::router::Container;
use crate::state::{AppState, StateCell};
use crate::workflows::Workflows;

pub type AppBackend = Backend<ReqwestTransport, PlatformStore>;

pub type AppWorkflows<'a> =
    Workflows<'a, ReqwestTransport, PlatformStore, BrowserGeolocator, DialogHost, Signal<AppState>>;

impl StateCell for Signal<AppState> {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.read())
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        let mut signal = *self;
        f(&mut signal.write());
    }
}

/// Everything a view needs to run a workflow.
#[derive(Clone)]
pub struct AppContext {
    pub backend: AppBackend,
    pub state: Signal<AppState>,
    pub dialogs: DialogHost,
    pub geo: BrowserGeolocator,
    pub config: AppConfig,
}

impl AppContext {
    pub fn workflows(&self) -> AppWorkflows<'_> {
        Workflows {
            backend: &self.backend,
            geo: &self.geo,
            dialogs: &self.dialogs,
            state: &self.state,
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.config.ui.placeholder_image
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_app_state() -> Signal<AppState> {
    use_app().state
}

/// The language currently selected in the header.
pub fn use_language() -> Language {
    use_app_state().read().language
}

/// Provider component that owns the application state.
/// Wrap the app with this component before rendering any view.
#[component]
pub fn AppProvider(config: AppConfig, children: Element) -> Element {
    let language = Language::from_code(&config.ui.default_language).unwrap_or_else(|| {
        tracing::warn!("Unknown language {:?}, using English", config.ui.default_language);
        Language::default()
    });
    let state = use_signal(|| AppState::new(language));
    let pending = use_signal(|| Option::<PendingDialog>::None);

    let ctx = use_hook(|| {
        let backend = Backend::from_config(ReqwestTransport::new(), store::platform_store(), &config);
        tracing::info!(
            "Backend at {:?} ({:?} surface)",
            config.api.base_url,
            backend.surface()
        );
        AppContext {
            backend,
            state,
            dialogs: DialogHost::new(pending),
            geo: BrowserGeolocator,
            config: config.clone(),
        }
    });
    use_context_provider(|| ctx.dialogs);
    let ctx = use_context_provider(|| ctx);

    // Load feeds and position once, when the app container first appears
    let started = use_hook(|| Rc::new(Cell::new(false)));
    use_effect(move || {
        if state.read().router.container() != Container::App || started.get() {
            return;
        }
        started.set(true);
        let ctx = ctx.clone();
        spawn(async move {
            ctx.workflows().initialize().await;
        });
    });

    rsx! {
        {children}
    }
}
