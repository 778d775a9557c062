//! Cache-first access to the SRD reference API.

use serde::de::DeserializeOwned;
use serde_json::Value;

use charsmith_domain::ResourceType;
use charsmith_shared::api::{ClassLevelDto, EquipmentCategoryDto, ResourceListDto};

use crate::infrastructure::api::ApiService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::ports::{ApiError, RepoError};

/// Default reference API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://www.dnd5eapi.co";

/// Fetch-or-serve-from-cache for any API endpoint.
///
/// The cache key is the full URL. A cached response is always served without
/// touching the network. Failures are never cached.
#[derive(Clone)]
pub struct SrdApiService {
    api: ApiService,
    cache: CacheService,
    base_url: String,
}

impl SrdApiService {
    pub fn new(api: ApiService, cache: CacheService, base_url: &str) -> Self {
        Self {
            api,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `endpoint` is a path such as `/api/races/elf`.
    pub async fn get_by_endpoint<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RepoError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let body = match self.cache.get::<Value>(&url)? {
            Some(cached) => cached,
            None => {
                tracing::debug!(url = %url, "Cache miss, fetching");
                let fetched: Value = self.api.call_endpoint(&url).await?;
                self.cache.set(&url, &fetched)?;
                fetched
            }
        };

        serde_json::from_value(body)
            .map_err(|e| ApiError::invalid_response(url, e).into())
    }

    pub async fn get_resource_list(
        &self,
        resource_type: ResourceType,
    ) -> Result<ResourceListDto, RepoError> {
        self.get_by_endpoint(&format!("/api/{}", resource_type.api_path()))
            .await
    }

    pub async fn get_by_index<T: DeserializeOwned>(
        &self,
        resource_type: ResourceType,
        index: &str,
    ) -> Result<T, RepoError> {
        self.get_by_endpoint(&format!("/api/{}/{}", resource_type.api_path(), index))
            .await
    }

    /// All twenty levels of a class.
    pub async fn get_class_levels(&self, class_index: &str) -> Result<Vec<ClassLevelDto>, RepoError> {
        self.get_by_endpoint(&format!("/api/classes/{class_index}/levels"))
            .await
    }

    pub async fn get_equipment_category(
        &self,
        index: &str,
    ) -> Result<EquipmentCategoryDto, RepoError> {
        self.get_by_index(ResourceType::EquipmentCategories, index)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::RetryConfig;
    use crate::infrastructure::local_store::InMemoryStore;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort};
    use crate::infrastructure::storage::StorageService;
    use std::sync::Arc;

    const RACES: &str = r#"{"count": 2, "results": [
        {"index": "dwarf", "name": "Dwarf", "url": "/api/races/dwarf"},
        {"index": "elf", "name": "Elf", "url": "/api/races/elf"}
    ]}"#;

    fn service(http: MockHttpPort) -> (SrdApiService, StorageService) {
        let storage = StorageService::new(Arc::new(InMemoryStore::new()));
        let api = ApiService::new(Arc::new(http), RetryConfig::default());
        let srd = SrdApiService::new(
            api,
            CacheService::new(storage.clone()),
            "https://www.dnd5eapi.co/",
        );
        (srd, storage)
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.ends_with(".co/api/races"))
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(RACES)));
        let (srd, _) = service(http);

        let first = srd.get_resource_list(ResourceType::Races).await.unwrap();
        let second = srd.get_resource_list(ResourceType::Races).await.unwrap();

        assert_eq!(first.count, 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn response_is_cached_under_full_url() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(RACES)));
        let (srd, storage) = service(http);

        srd.get_resource_list(ResourceType::Races).await.unwrap();

        assert_eq!(
            storage.get_all_keys().unwrap(),
            vec!["cache_https://www.dnd5eapi.co/api/races".to_string()]
        );
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(2).returning(|_| {
            Ok(HttpResponse {
                status: 500,
                retry_after: None,
                body: String::new(),
            })
        });
        let (srd, storage) = service(http);

        assert!(srd.get_resource_list(ResourceType::Races).await.is_err());
        assert!(srd.get_resource_list(ResourceType::Races).await.is_err());
        assert!(storage.get_all_keys().unwrap().is_empty());
    }

    #[tokio::test]
    async fn class_levels_use_nested_endpoint() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.ends_with(".co/api/classes/wizard/levels"))
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::ok(
                    r#"[{"index": "wizard-1", "level": 1, "features": [],
                        "class": {"index": "wizard", "name": "Wizard"}}]"#,
                ))
            });
        let (srd, _) = service(http);

        let levels = srd.get_class_levels("wizard").await.unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].level, 1);
    }
}
