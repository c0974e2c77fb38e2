use super::context::use_sidebar;
use super::sidebars::sidebars;
use crate::shared::icons::icon;
use contracts::courseware::sidebar::{NotificationStatus, SidebarId};
use leptos::prelude::*;

/// One toggle button per sidebar.
///
/// The notifications trigger carries a dot until notifications are seen.
#[component]
pub fn SidebarTriggers() -> impl IntoView {
    let ctx = use_sidebar();

    view! {
        <div class="sidebar-triggers">
            {sidebars()
                .into_iter()
                .map(|sidebar| {
                    let id = sidebar.id;
                    let is_open = move || ctx.current_sidebar.get() == Some(id);
                    let show_dot = move || {
                        id == SidebarId::Notifications
                            && ctx.notification_status.get() != Some(NotificationStatus::Inactive)
                    };
                    view! {
                        <button
                            class="sidebar-trigger"
                            class:sidebar-trigger--active=is_open
                            data-sidebar=id.code()
                            title=sidebar.title
                            aria-pressed=move || is_open().to_string()
                            on:click=move |_| ctx.toggle_sidebar(id)
                        >
                            {icon(sidebar.icon)}
                            <Show when=show_dot>
                                <span class="sidebar-trigger__dot"></span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
