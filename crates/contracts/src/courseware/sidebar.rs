use serde::{Deserialize, Serialize};

/// Auxiliary panels that can be shown next to course content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarId {
    Discussions,
    Notifications,
}

impl SidebarId {
    /// Code used in storage and DOM attributes
    pub fn code(&self) -> &'static str {
        match self {
            SidebarId::Discussions => "discussions",
            SidebarId::Notifications => "notifications",
        }
    }

    /// All known sidebars, in display order
    pub fn all() -> Vec<SidebarId> {
        vec![SidebarId::Discussions, SidebarId::Notifications]
    }
}

impl std::fmt::Display for SidebarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether the notification indicator still needs the learner's attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Active,
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_json_uses_code() {
        for id in SidebarId::all() {
            assert_eq!(
                serde_json::to_string(&id).unwrap(),
                format!("\"{}\"", id.code())
            );
        }
    }

    #[test]
    fn test_sidebar_json_matches_code() {
        assert_eq!(
            serde_json::to_string(&SidebarId::Discussions).unwrap(),
            "\"discussions\""
        );
        let parsed: Option<SidebarId> = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn test_notification_status_json() {
        let parsed: NotificationStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, NotificationStatus::Inactive);
        assert!(serde_json::from_str::<NotificationStatus>("\"unknown\"").is_err());
        assert_eq!(
            serde_json::to_string(&NotificationStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
