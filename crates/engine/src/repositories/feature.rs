//! Feature queries. The API has no server-side filtering, so every query
//! loads full feature details and filters client-side.

use charsmith_domain::{Feature, HasBaseResource};

use crate::infrastructure::ports::RepoError;
use crate::repositories::resource::BaseResourceRepository;
use crate::repositories::schema::FeatureSchema;

pub type FeatureRepository = BaseResourceRepository<FeatureSchema>;

impl BaseResourceRepository<FeatureSchema> {
    /// Full details of every listed feature, in listing order.
    ///
    /// Details are fetched one at a time and cached after the first call.
    pub async fn get_all_detailed(&self) -> Result<Vec<Feature>, RepoError> {
        let listing = self.get_all().await?;
        let mut features = Vec::with_capacity(listing.len());
        for entry in &listing {
            if let Some(feature) = self.get(entry.id()).await? {
                features.push(feature);
            }
        }
        Ok(features)
    }

    pub async fn get_by_class(&self, class_id: &str) -> Result<Vec<Feature>, RepoError> {
        Ok(self
            .get_all_detailed()
            .await?
            .into_iter()
            .filter(|f| f.class.id == class_id)
            .collect())
    }

    pub async fn get_by_class_and_level(
        &self,
        class_id: &str,
        level: u8,
    ) -> Result<Vec<Feature>, RepoError> {
        Ok(self
            .get_by_class(class_id)
            .await?
            .into_iter()
            .filter(|f| f.level == level)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort};
    use crate::repositories::resource::test_support::services;

    fn feature_body(index: &str, class: &str, level: u8) -> String {
        format!(
            r#"{{"index": "{index}", "name": "{index}", "level": {level},
                "class": {{"index": "{class}", "name": "{class}"}}, "desc": []}}"#
        )
    }

    fn http() -> MockHttpPort {
        let mut http = MockHttpPort::new();
        http.expect_get().returning(|url| {
            let body = if url.ends_with("/api/features") {
                r#"{"count": 3, "results": [
                    {"index": "rage", "name": "Rage"},
                    {"index": "reckless-attack", "name": "Reckless Attack"},
                    {"index": "arcane-recovery", "name": "Arcane Recovery"}
                ]}"#
                .to_string()
            } else if url.ends_with("/rage") {
                feature_body("rage", "barbarian", 1)
            } else if url.ends_with("/reckless-attack") {
                feature_body("reckless-attack", "barbarian", 2)
            } else {
                feature_body("arcane-recovery", "wizard", 1)
            };
            Ok(HttpResponse::ok(body))
        });
        http
    }

    #[tokio::test]
    async fn filters_by_class() {
        let (srd, homebrew) = services(http());
        let repo = FeatureRepository::new(FeatureSchema::default(), srd, homebrew);

        let features = repo.get_by_class("barbarian").await.unwrap();
        let ids: Vec<&str> = features.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["rage", "reckless-attack"]);
    }

    #[tokio::test]
    async fn filters_by_class_and_level() {
        let (srd, homebrew) = services(http());
        let repo = FeatureRepository::new(FeatureSchema::default(), srd, homebrew);

        let features = repo.get_by_class_and_level("barbarian", 2).await.unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].id(), "reckless-attack");
    }
}
