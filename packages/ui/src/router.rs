//! View router.
//!
//! Four independent axes, each showing exactly one thing at a time:
//!
//! | Axis | Values | Transition |
//! |------|--------|------------|
//! | [`Container`] | auth / app | auth → app once, on login or registration |
//! | [`AuthScreen`] | login / registration | link clicks, login first |
//! | [`Page`] | home, alerts, community, missing, incident form, family form | navigation |
//! | tabs | [`AlertsTab`], [`MissingTab`] | per group, independent |
//!
//! Every transition is synchronous and re-selecting the current value is a no-op.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Container {
    #[default]
    Auth,
    App,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Registration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Alerts,
    Community,
    Missing,
    ReportIncident,
    AddFamilyMember,
}

impl Page {
    /// Pages reachable from the bottom navigation bar.
    pub const NAV: [Page; 4] = [Page::Home, Page::Alerts, Page::Community, Page::Missing];

    /// Translation key of the navigation label.
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Home => "navHome",
            Page::Alerts => "navAlerts",
            Page::Community => "navCommunity",
            Page::Missing => "navMissing",
            Page::ReportIncident => "reportIncidentTitle",
            Page::AddFamilyMember => "addFamilyTitle",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertsTab {
    #[default]
    Announcements,
    NearbySos,
}

impl AlertsTab {
    pub const ALL: [AlertsTab; 2] = [AlertsTab::Announcements, AlertsTab::NearbySos];

    pub fn label_key(self) -> &'static str {
        match self {
            AlertsTab::Announcements => "announcements",
            AlertsTab::NearbySos => "nearbySos",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingTab {
    #[default]
    SearchRegistry,
    ReportMissing,
    FamilyStatus,
}

impl MissingTab {
    pub const ALL: [MissingTab; 3] = [
        MissingTab::SearchRegistry,
        MissingTab::ReportMissing,
        MissingTab::FamilyStatus,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            MissingTab::SearchRegistry => "searchRegistry",
            MissingTab::ReportMissing => "reportMissing",
            MissingTab::FamilyStatus => "familyStatus",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    container: Container,
    auth_screen: AuthScreen,
    page: Page,
    alerts_tab: AlertsTab,
    missing_tab: MissingTab,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn auth_screen(&self) -> AuthScreen {
        self.auth_screen
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn alerts_tab(&self) -> AlertsTab {
        self.alerts_tab
    }

    pub fn missing_tab(&self) -> MissingTab {
        self.missing_tab
    }

    /// Leave the auth screens for good. Returns `true` on the first call only.
    pub fn enter_app(&mut self) -> bool {
        let entered = self.container == Container::Auth;
        self.container = Container::App;
        entered
    }

    pub fn show_auth_screen(&mut self, screen: AuthScreen) {
        self.auth_screen = screen;
    }

    pub fn show_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn select_alerts_tab(&mut self, tab: AlertsTab) {
        self.alerts_tab = tab;
    }

    pub fn select_missing_tab(&mut self, tab: MissingTab) {
        self.missing_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let router = ViewRouter::new();
        assert_eq!(router.container(), Container::Auth);
        assert_eq!(router.auth_screen(), AuthScreen::Login);
        assert_eq!(router.page(), Page::Home);
        assert_eq!(router.alerts_tab(), AlertsTab::Announcements);
        assert_eq!(router.missing_tab(), MissingTab::SearchRegistry);
    }

    #[test]
    fn test_enter_app_is_one_way() {
        let mut router = ViewRouter::new();
        router.show_auth_screen(AuthScreen::Registration);
        assert!(router.enter_app());
        assert!(!router.enter_app());
        assert_eq!(router.container(), Container::App);
    }

    #[test]
    fn test_tab_groups_are_independent() {
        let mut router = ViewRouter::new();
        router.select_alerts_tab(AlertsTab::NearbySos);
        router.select_missing_tab(MissingTab::FamilyStatus);
        router.show_page(Page::Community);

        assert_eq!(router.alerts_tab(), AlertsTab::NearbySos);
        assert_eq!(router.missing_tab(), MissingTab::FamilyStatus);

        router.select_missing_tab(MissingTab::ReportMissing);
        assert_eq!(router.alerts_tab(), AlertsTab::NearbySos);
    }

    #[test]
    fn test_reselecting_is_noop() {
        let mut router = ViewRouter::new();
        router.show_page(Page::Missing);
        let before = router;
        router.show_page(Page::Missing);
        router.select_missing_tab(router.missing_tab());
        assert_eq!(router, before);
    }
}
