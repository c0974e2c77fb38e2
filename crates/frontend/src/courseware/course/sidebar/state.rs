//! Sidebar selection and notification state for one course.
//!
//! Plain data plus transitions; the reactive wrapper lives in `context`.

use crate::shared::storage::{get_json, set_json, KeyValueStore};
use crate::shared::viewport::ViewportClass;
use contracts::courseware::sidebar::{NotificationStatus, SidebarId};

pub fn sidebar_key(course_id: &str) -> String {
    format!("sidebar.{}", course_id)
}

pub fn notification_status_key(course_id: &str) -> String {
    format!("notificationStatus.{}", course_id)
}

pub fn upgrade_notification_key(course_id: &str) -> String {
    format!("upgradeNotificationCurrentState.{}", course_id)
}

/// Page signals that pick the default sidebar besides the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarDefaults {
    /// Course offers a verified track
    pub verified_mode: bool,
    /// Page was opened with `sidebar=true`
    pub sidebar_requested: bool,
}

/// Default selection for a non full-screen layout.
///
/// Verified-mode courses always start on notifications; otherwise discussions
/// open on wide viewports or when requested through the query string.
pub fn get_sidebar(viewport: ViewportClass, defaults: SidebarDefaults) -> Option<SidebarId> {
    if defaults.verified_mode {
        Some(SidebarId::Notifications)
    } else if viewport.should_display_sidebar_open || defaults.sidebar_requested {
        Some(SidebarId::Discussions)
    } else {
        None
    }
}

/// Selection after the user clicks the trigger for `requested`
pub fn toggled(current: Option<SidebarId>, requested: SidebarId) -> Option<SidebarId> {
    if current == Some(requested) {
        None
    } else {
        Some(requested)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarState {
    pub course_id: String,
    pub current_sidebar: Option<SidebarId>,
    pub notification_status: Option<NotificationStatus>,
    pub upgrade_notification_current_state: Option<String>,
}

impl SidebarState {
    /// Initial state on mount.
    ///
    /// Full-screen layouts restore the last explicit choice for the course
    /// instead of applying the defaults.
    pub fn load(
        course_id: &str,
        viewport: ViewportClass,
        defaults: SidebarDefaults,
        store: &dyn KeyValueStore,
    ) -> Self {
        let current_sidebar = if viewport.should_display_full_screen {
            get_json::<SidebarId>(store, &sidebar_key(course_id))
        } else {
            get_sidebar(viewport, defaults)
        };
        log::debug!(
            "sidebar state for {}: {:?} (full screen: {})",
            course_id,
            current_sidebar,
            viewport.should_display_full_screen
        );

        Self {
            course_id: course_id.to_string(),
            current_sidebar,
            notification_status: get_json(store, &notification_status_key(course_id)),
            upgrade_notification_current_state: get_json(
                store,
                &upgrade_notification_key(course_id),
            ),
        }
    }

    /// Opens `requested`, or closes it if it is already open, and persists the result.
    pub fn toggle_sidebar(&mut self, requested: SidebarId, store: &dyn KeyValueStore) {
        self.current_sidebar = toggled(self.current_sidebar, requested);
        log::debug!("toggle {} -> {:?}", requested, self.current_sidebar);
        set_json(store, &sidebar_key(&self.course_id), &self.current_sidebar);
    }

    pub fn on_notification_seen(&mut self, store: &dyn KeyValueStore) {
        self.notification_status = Some(NotificationStatus::Inactive);
        set_json(
            store,
            &notification_status_key(&self.course_id),
            &NotificationStatus::Inactive,
        );
    }

    /// Reaction to the view reporting `unit` after `prev_unit`.
    ///
    /// The first report (no previous unit) and repeats of the same unit leave
    /// the selection alone; the mount already picked it. `viewport` is the
    /// layout at the time of navigation, not at mount.
    pub fn on_unit_change(
        &mut self,
        prev_unit: Option<&str>,
        unit: &str,
        viewport: ViewportClass,
        defaults: SidebarDefaults,
    ) -> bool {
        match prev_unit {
            Some(prev) if prev != unit => self.on_navigation(viewport, defaults),
            _ => false,
        }
    }

    /// Reaction to moving to another unit of the same course.
    ///
    /// Returns whether the selection changed. Full-screen layouts keep the
    /// current selection while paging through units.
    pub fn on_navigation(&mut self, viewport: ViewportClass, defaults: SidebarDefaults) -> bool {
        if viewport.should_display_full_screen {
            return false;
        }
        let next = get_sidebar(viewport, defaults);
        let changed = next != self.current_sidebar;
        self.current_sidebar = next;
        changed
    }
}
