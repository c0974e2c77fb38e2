pub mod context;
pub mod discussions;
pub mod notifications;
pub mod sidebar;
pub mod sidebars;
pub mod state;
pub mod triggers;

pub use context::{use_sidebar, SidebarContext, SidebarProvider};
pub use sidebar::Sidebar;
pub use triggers::SidebarTriggers;
