use super::context::use_sidebar;
use super::discussions::DiscussionsSidebar;
use super::notifications::NotificationsSidebar;
use super::sidebars::info;
use crate::shared::icons::icon;
use contracts::courseware::sidebar::SidebarId;
use leptos::prelude::*;
use thaw::*;

/// Renders whichever sidebar is currently selected, or nothing.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_sidebar();

    move || match ctx.current_sidebar.get() {
        Some(SidebarId::Discussions) => view! { <DiscussionsSidebar /> }.into_any(),
        Some(SidebarId::Notifications) => view! { <NotificationsSidebar /> }.into_any(),
        None => ().into_any(),
    }
}

/// Frame shared by all sidebars: header with title and close button.
///
/// On full-screen layouts the frame covers the unit and the close button
/// reads "Back to course".
#[component]
pub fn SidebarBase(sidebar_id: SidebarId, children: Children) -> impl IntoView {
    let ctx = use_sidebar();
    let sidebar = info(sidebar_id);

    view! {
        <aside
            class="course-sidebar"
            class:course-sidebar--full-screen=move || ctx.should_display_full_screen.get()
            data-sidebar=sidebar_id.code()
            aria-label=sidebar.title
        >
            <div class="course-sidebar__header">
                <span class="course-sidebar__title">{sidebar.title}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.toggle_sidebar(sidebar_id)
                >
                    {move || {
                        if ctx.should_display_full_screen.get() {
                            view! { {icon("chevron-left")} <span>"Back to course"</span> }.into_any()
                        } else {
                            icon("close")
                        }
                    }}
                </Button>
            </div>
            <div class="course-sidebar__content">
                {children()}
            </div>
        </aside>
    }
}
