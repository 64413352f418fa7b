//! Frontend Models
//!
//! Pin records as returned by the API gateway.

use std::fmt;

use leptos_masonry::MasonryItem;
use serde::{Deserialize, Deserializer, Serialize};

/// Pin identifier. The gateway sends either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PinId(pub String);

impl PinId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinId {
    fn from(s: &str) -> Self {
        PinId(s.to_string())
    }
}

impl<'de> Deserialize<'de> for PinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => PinId(n.to_string()),
            RawId::Text(s) => PinId(s),
        })
    }
}

/// Pin data structure (matches gateway payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: PinId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub saves: u32,
    /// Height/width estimate; unusable values decode to `None`
    #[serde(default, deserialize_with = "lenient_ratio")]
    pub aspect_ratio: Option<f64>,
}

fn lenient_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let ratio = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(ratio.filter(|r| r.is_finite() && *r > 0.0))
}

impl MasonryItem for Pin {
    type Key = PinId;

    fn key(&self) -> PinId {
        self.id.clone()
    }

    fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }
}
