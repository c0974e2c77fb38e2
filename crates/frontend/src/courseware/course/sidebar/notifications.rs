use super::context::use_sidebar;
use super::sidebar::SidebarBase;
use crate::shared::model_store::use_model;
use contracts::courseware::course_meta::{CourseHomeMeta, COURSE_HOME_META_MODEL};
use contracts::courseware::sidebar::SidebarId;
use leptos::prelude::*;
use thaw::*;

/// Upgrade-notice state set once the learner dismisses it
pub const UPGRADE_NOTICE_DISMISSED: &str = "dismissed";

/// Notification tray. Opening it marks notifications as seen.
#[component]
pub fn NotificationsSidebar() -> impl IntoView {
    let ctx = use_sidebar();
    let meta = use_model::<CourseHomeMeta>(COURSE_HOME_META_MODEL, ctx.course_id());

    Effect::new(move |_| ctx.on_notification_seen());

    let upgrade = move || {
        let dismissed = ctx.upgrade_notification_current_state.get().as_deref()
            == Some(UPGRADE_NOTICE_DISMISSED);
        if dismissed {
            return None;
        }
        meta.get().and_then(|meta| meta.verified_mode)
    };

    view! {
        <SidebarBase sidebar_id=SidebarId::Notifications>
            {move || match upgrade() {
                Some(mode) => view! {
                    <div class="upgrade-notice">
                        <p>{format!("Upgrade to the verified track for {}{:.2}", mode.currency_symbol, mode.price)}</p>
                        <a class="upgrade-notice__link" href=mode.upgrade_url>"Upgrade"</a>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                ctx.set_upgrade_notification_current_state(Some(
                                    UPGRADE_NOTICE_DISMISSED.to_string(),
                                ))
                            }
                        >
                            "Dismiss"
                        </Button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p class="notifications-sidebar__empty">"No new notifications"</p>
                }
                .into_any(),
            }}
        </SidebarBase>
    }
}
