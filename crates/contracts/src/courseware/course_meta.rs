use serde::{Deserialize, Serialize};

/// Model name under which course home metadata is registered
pub const COURSE_HOME_META_MODEL: &str = "courseHomeMeta";

/// Verified (paid) track offered for a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedMode {
    pub price: f64,
    pub currency_symbol: String,
    pub upgrade_url: String,
}

/// Course home metadata as consumed by the courseware view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseHomeMeta {
    pub id: String,
    pub title: String,
    pub verified_mode: Option<VerifiedMode>,
}

impl CourseHomeMeta {
    pub fn is_verified_mode(&self) -> bool {
        self.verified_mode.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case() {
        let meta: CourseHomeMeta = serde_json::from_str(
            r#"{
                "id": "course-v1:edX+DemoX+Demo",
                "title": "Demo",
                "verifiedMode": {"price": 49.0, "currencySymbol": "$", "upgradeUrl": "/basket"}
            }"#,
        )
        .unwrap();
        assert!(meta.is_verified_mode());
        assert_eq!(meta.verified_mode.unwrap().currency_symbol, "$");
    }

    #[test]
    fn test_missing_verified_mode() {
        let meta: CourseHomeMeta =
            serde_json::from_str(r#"{"id": "C1", "verifiedMode": null}"#).unwrap();
        assert!(!meta.is_verified_mode());
        assert_eq!(meta.title, "");
    }
}
