//! Course unit view with prev/next navigation and the sidebar.

use super::sidebar::{Sidebar, SidebarProvider, SidebarTriggers};
use crate::shared::icons::icon;
use crate::shared::query::{current_search, query_param};
use crate::shared::storage::SharedStore;
use crate::shared::viewport::use_viewport_class;
use leptos::prelude::*;
use thaw::*;

/// Index of `?unit_id=` within `units`, or the first unit
fn initial_unit_index(search: &str, units: &[String]) -> usize {
    query_param(search, "unit_id")
        .and_then(|unit| units.iter().position(|u| *u == unit))
        .unwrap_or(0)
}

#[component]
pub fn CoursePage(
    #[prop(into)] course_id: String,
    units: Vec<String>,
    store: SharedStore,
) -> impl IntoView {
    let viewport = use_viewport_class();
    let unit_count = units.len();
    let index = RwSignal::new(initial_unit_index(&current_search(), &units));
    let units = StoredValue::new(units);
    let unit_id = Signal::derive(move || {
        units.with_value(|units| units.get(index.get()).cloned().unwrap_or_default())
    });

    let go_previous = move |_: leptos::ev::MouseEvent| {
        index.update(|i| *i = i.saturating_sub(1))
    };
    let go_next = move |_: leptos::ev::MouseEvent| {
        index.update(|i| {
            if *i + 1 < unit_count {
                *i += 1;
            }
        })
    };

    view! {
        <SidebarProvider course_id=course_id unit_id=unit_id viewport=viewport store=store>
            <div class="course">
                <div class="course__toolbar">
                    <ButtonGroup>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || index.get() == 0)
                            on_click=go_previous
                        >
                            {icon("chevron-left")}
                            "Previous"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || index.get() + 1 >= unit_count)
                            on_click=go_next
                        >
                            "Next"
                            {icon("chevron-right")}
                        </Button>
                    </ButtonGroup>
                    <SidebarTriggers />
                </div>
                <div class="course__body">
                    <main class="course__unit" data-unit=move || unit_id.get()>
                        {move || format!("Unit {} of {}", index.get() + 1, unit_count)}
                    </main>
                    <Sidebar />
                </div>
            </div>
        </SidebarProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units() -> Vec<String> {
        vec!["u1".to_string(), "u2".to_string(), "u3".to_string()]
    }

    #[test]
    fn test_initial_unit_from_query() {
        assert_eq!(initial_unit_index("?unit_id=u3", &units()), 2);
    }

    #[test]
    fn test_unknown_or_missing_unit_starts_at_first() {
        assert_eq!(initial_unit_index("?unit_id=nope", &units()), 0);
        assert_eq!(initial_unit_index("", &units()), 0);
        assert_eq!(initial_unit_index("?unit_id=u1", &[]), 0);
    }
}
