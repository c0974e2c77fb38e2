use super::context::use_sidebar;
use super::sidebar::SidebarBase;
use contracts::courseware::sidebar::SidebarId;
use leptos::prelude::*;

/// Discussion topics for the current unit.
#[component]
pub fn DiscussionsSidebar() -> impl IntoView {
    let ctx = use_sidebar();
    let course_id = ctx.course_id();

    view! {
        <SidebarBase sidebar_id=SidebarId::Discussions>
            <div class="discussions-sidebar" data-course=course_id>
                <p class="discussions-sidebar__topic">
                    {move || format!("Topic for unit {}", ctx.unit_id.get())}
                </p>
            </div>
        </SidebarBase>
    }
}
