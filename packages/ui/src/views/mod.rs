mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod shell;
pub use shell::AppShell;

mod auth;
pub use auth::{LoginScreen, RegistrationScreen};

mod home;
pub use home::HomePage;

mod alerts;
pub use alerts::AlertsPage;

mod community;
pub use community::CommunityPage;

mod missing;
pub use missing::MissingPage;

mod incident;
pub use incident::ReportIncidentPage;

mod family;
pub use family::AddFamilyMemberPage;

mod photo;
pub use photo::{FallbackImage, PhotoPicker};
