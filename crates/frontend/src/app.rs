use crate::courseware::CoursePage;
use crate::shared::model_store::{ModelRegistry, ModelStoreProvider};
use crate::shared::query::{current_search, query_param};
use crate::shared::storage::{BrowserLocalStorage, SharedStore};
use contracts::courseware::course_meta::{CourseHomeMeta, VerifiedMode, COURSE_HOME_META_MODEL};
use leptos::prelude::*;
use std::sync::Arc;

const DEMO_COURSE_ID: &str = "course-v1:edX+DemoX+Demo_Course";
const DEMO_VERIFIED_COURSE_ID: &str = "course-v1:edX+DemoX+Verified_Course";

/// Course metadata normally loaded with the course home page
fn demo_registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.add_model(
        COURSE_HOME_META_MODEL,
        DEMO_COURSE_ID,
        &CourseHomeMeta {
            id: DEMO_COURSE_ID.to_string(),
            title: "Demonstration Course".to_string(),
            verified_mode: None,
        },
    );
    registry.add_model(
        COURSE_HOME_META_MODEL,
        DEMO_VERIFIED_COURSE_ID,
        &CourseHomeMeta {
            id: DEMO_VERIFIED_COURSE_ID.to_string(),
            title: "Demonstration Course (verified)".to_string(),
            verified_mode: Some(VerifiedMode {
                price: 49.0,
                currency_symbol: "$".to_string(),
                upgrade_url: "/basket/add/?sku=DEMO".to_string(),
            }),
        },
    );
    registry
}

fn demo_units() -> Vec<String> {
    (1..=5)
        .map(|n| format!("block-v1:edX+DemoX+type@vertical+block@unit{}", n))
        .collect()
}

#[component]
pub fn App() -> impl IntoView {
    let course_id =
        query_param(&current_search(), "course_id").unwrap_or_else(|| DEMO_COURSE_ID.to_string());
    let store: SharedStore = Arc::new(BrowserLocalStorage);

    view! {
        <ModelStoreProvider registry=demo_registry()>
            <CoursePage course_id=course_id units=demo_units() store=store />
        </ModelStoreProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(registry: &ModelRegistry, id: &str) -> Option<CourseHomeMeta> {
        registry.get_model(COURSE_HOME_META_MODEL, id)
    }

    #[test]
    fn test_demo_registry_has_both_courses() {
        let registry = demo_registry();
        assert!(!meta(&registry, DEMO_COURSE_ID).unwrap().is_verified_mode());
        assert!(meta(&registry, DEMO_VERIFIED_COURSE_ID).unwrap().is_verified_mode());
    }

    #[test]
    fn test_demo_units_are_distinct() {
        let units = demo_units();
        assert_eq!(units.len(), 5);
        assert!(units.windows(2).all(|pair| pair[0] != pair[1]));
    }
}
