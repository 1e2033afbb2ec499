//! Search log entity
//!
//! The schema exists for a planned search-logging feature; no route reads or
//! writes it yet, so there is deliberately no repository here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A logged search query, keyed by the client that issued it.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SearchLog {
    pub id: Uuid,
    pub client: Option<String>,
    pub query: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_log_serializes_camel_case() {
        let log = SearchLog {
            id: Uuid::new_v4(),
            client: Some("web".to_string()),
            query: "widget".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["client"], "web");
        assert_eq!(json["query"], "widget");
        assert!(json.get("createdAt").is_some());
    }
}
