//! Sidebar context shared by the courseware view.
//!
//! `SidebarProvider` owns the state for one course and hands a `Copy` facade
//! of signals to its descendants; `use_sidebar` reads it back.

use super::state::{SidebarDefaults, SidebarState};
use crate::shared::model_store::use_model;
use crate::shared::query::{current_search, sidebar_requested};
use crate::shared::storage::SharedStore;
use crate::shared::viewport::ViewportClass;
use contracts::courseware::course_meta::{CourseHomeMeta, COURSE_HOME_META_MODEL};
use contracts::courseware::sidebar::{NotificationStatus, SidebarId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SidebarContext {
    state: RwSignal<SidebarState>,
    store: StoredValue<SharedStore>,
    pub current_sidebar: Memo<Option<SidebarId>>,
    pub notification_status: Memo<Option<NotificationStatus>>,
    pub upgrade_notification_current_state: Memo<Option<String>>,
    pub should_display_sidebar_open: Memo<bool>,
    pub should_display_full_screen: Memo<bool>,
    pub unit_id: Signal<String>,
}

impl SidebarContext {
    pub fn toggle_sidebar(&self, sidebar_id: SidebarId) {
        self.store.with_value(|store| {
            self.state
                .update(|state| state.toggle_sidebar(sidebar_id, store.as_ref()));
        });
    }

    pub fn on_notification_seen(&self) {
        self.store.with_value(|store| {
            self.state
                .update(|state| state.on_notification_seen(store.as_ref()));
        });
    }

    /// In-memory only; use [`Self::on_notification_seen`] to persist.
    pub fn set_notification_status(&self, status: Option<NotificationStatus>) {
        self.state
            .update(|state| state.notification_status = status);
    }

    /// In-memory only; the stored value is read once on mount.
    pub fn set_upgrade_notification_current_state(&self, value: Option<String>) {
        self.state
            .update(|state| state.upgrade_notification_current_state = value);
    }

    pub fn course_id(&self) -> String {
        self.state.with_untracked(|state| state.course_id.clone())
    }
}

/// Provides [`SidebarContext`] for `course_id` to children.
///
/// The host passes the layout class (usually [`use_viewport_class`]) and the
/// key/value store the state is persisted in.
///
/// [`use_viewport_class`]: crate::shared::viewport::use_viewport_class
#[component]
pub fn SidebarProvider(
    #[prop(into)] course_id: String,
    #[prop(into)] unit_id: Signal<String>,
    #[prop(into)] viewport: Signal<ViewportClass>,
    store: SharedStore,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let meta = use_model::<CourseHomeMeta>(COURSE_HOME_META_MODEL, course_id.clone());

    let defaults = move || SidebarDefaults {
        verified_mode: meta
            .with_untracked(|meta| meta.as_ref().is_some_and(CourseHomeMeta::is_verified_mode)),
        sidebar_requested: sidebar_requested(&current_search()),
    };

    let state = RwSignal::new(SidebarState::load(
        &course_id,
        viewport.get_untracked(),
        defaults(),
        store.as_ref(),
    ));

    // Runs once per unit; the returned unit is the next run's `prev_unit`.
    Effect::new(move |prev_unit: Option<String>| {
        let unit = unit_id.get();
        let changed = state.try_update(|st| {
            st.on_unit_change(
                prev_unit.as_deref(),
                &unit,
                viewport.get_untracked(),
                defaults(),
            )
        });
        if changed == Some(true) {
            log::debug!("sidebar re-derived on navigation to {}", unit);
        }
        unit
    });

    let context = SidebarContext {
        state,
        store: StoredValue::new(store),
        current_sidebar: Memo::new(move |_| state.with(|st| st.current_sidebar)),
        notification_status: Memo::new(move |_| state.with(|st| st.notification_status)),
        upgrade_notification_current_state: Memo::new(move |_| {
            state.with(|st| st.upgrade_notification_current_state.clone())
        }),
        should_display_sidebar_open: Memo::new(move |_| viewport.get().should_display_sidebar_open),
        should_display_full_screen: Memo::new(move |_| viewport.get().should_display_full_screen),
        unit_id,
    };
    provide_context(context);

    children.map(|children| children())
}

/// Hook to use the sidebar context.
pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
        .expect("SidebarContext not found. Wrap the course view with SidebarProvider.")
}
