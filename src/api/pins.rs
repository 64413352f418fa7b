//! Pin Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::feed::ALL_CATEGORY;
use crate::models::Pin;

/// List responses arrive bare or wrapped in `{ "data": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum PinList {
    Bare(Vec<Pin>),
    Wrapped { data: Vec<Pin> },
}

impl From<PinList> for Vec<Pin> {
    fn from(list: PinList) -> Self {
        match list {
            PinList::Bare(pins) | PinList::Wrapped { data: pins } => pins,
        }
    }
}

pub fn trending_path(limit: u32, page: u32) -> String {
    format!("/pins/trending?limit={}&page={}", limit, page + 1)
}

/// `page` is zero-based here; the gateway counts from 1
pub fn category_path(category: &str, page: u32, limit: u32) -> String {
    format!(
        "/pins/category/{}?page={}&limit={}",
        utf8_percent_encode(category, NON_ALPHANUMERIC),
        page + 1,
        limit
    )
}

#[derive(Clone, Debug)]
pub struct PinService {
    client: ApiClient,
}

impl PinService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn trending(&self, limit: u32, page: u32) -> Result<Vec<Pin>, ApiError> {
        let list: PinList = self.client.get_json(&trending_path(limit, page)).await?;
        Ok(list.into())
    }

    pub async fn by_category(&self, category: &str, page: u32, limit: u32) -> Result<Vec<Pin>, ApiError> {
        let list: PinList = self.client.get_json(&category_path(category, page, limit)).await?;
        Ok(list.into())
    }

    /// One feed page; the unfiltered feed is served by the trending endpoint
    pub async fn page(&self, category: &str, page: u32, limit: u32) -> Result<Vec<Pin>, ApiError> {
        if category == ALL_CATEGORY {
            self.trending(limit, page).await
        } else {
            self.by_category(category, page, limit).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PinId;

    #[test]
    fn test_paths() {
        assert_eq!(trending_path(20, 0), "/pins/trending?limit=20&page=1");
        assert_eq!(category_path("Digital Art", 2, 20), "/pins/category/Digital%20Art?page=3&limit=20");
        assert_eq!(category_path("3D Art", 0, 10), "/pins/category/3D%20Art?page=1&limit=10");
    }

    #[test]
    fn test_list_envelopes() {
        let bare: PinList = serde_json::from_str(r#"[{"id": 1}, {"id": "b"}]"#).unwrap();
        let wrapped: PinList = serde_json::from_str(r#"{"data": [{"id": 1}]}"#).unwrap();
        assert_eq!(Vec::<Pin>::from(bare).len(), 2);
        assert_eq!(Vec::<Pin>::from(wrapped)[0].id, PinId::from("1"));
    }
}
