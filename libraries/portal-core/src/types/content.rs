/// Content references carried inside playlists and goals
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A content item as the content platform describes it.
///
/// Only the fields the gateway computes with are typed; everything else is
/// carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Content identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Icon URL shown for the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_icon: Option<String>,

    /// Duration in seconds
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,

    /// Platform content type ("Course", "Resource", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Resource type refining a "Resource" content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Label derived by the gateway from content/resource type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_content_type: Option<String>,

    /// Remaining upstream fields, passed through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentItem {
    /// Content item carrying only an identifier
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..Self::default()
        }
    }
}

/// Reference to a content item by identifier only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    /// Content identifier
    pub identifier: String,
}

/// Accept a number or a numeric string; anything else becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
