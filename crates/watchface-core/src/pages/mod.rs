pub mod page;
pub mod page_manager;
pub mod setup_menu;
pub mod watchface_setup;

pub use page::{Page, PageWrapper};
pub use page_manager::PageManager;
pub use setup_menu::SetupMenuPage;
pub use watchface_setup::WatchfaceSetupPage;
