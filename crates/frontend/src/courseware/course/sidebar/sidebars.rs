//! Registry of the sidebars the course view knows how to render.

use contracts::courseware::sidebar::SidebarId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarInfo {
    pub id: SidebarId,
    pub title: &'static str,
    pub icon: &'static str,
}

pub fn info(id: SidebarId) -> SidebarInfo {
    match id {
        SidebarId::Discussions => SidebarInfo {
            id,
            title: "Discussions",
            icon: "discussions",
        },
        SidebarId::Notifications => SidebarInfo {
            id,
            title: "Notifications",
            icon: "notifications",
        },
    }
}

/// Sidebars in trigger-bar order
pub fn sidebars() -> Vec<SidebarInfo> {
    SidebarId::all().into_iter().map(info).collect()
}
