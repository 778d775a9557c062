use charsmith_domain::{is_homebrew_id, ClassLevel};
use charsmith_shared::records::ClassLevelRecord;

use crate::infrastructure::ports::RepoError;
use crate::repositories::resource::BaseResourceRepository;
use crate::repositories::schema::{ClassLevelSchema, ResourceSchema};

pub type ClassLevelRepository = BaseResourceRepository<ClassLevelSchema>;

impl BaseResourceRepository<ClassLevelSchema> {
    /// Every level of a class, SRD levels first, sorted by level within each source.
    pub async fn get_by_class(&self, class_id: &str) -> Result<Vec<ClassLevel>, RepoError> {
        let mut levels = Vec::new();

        if !is_homebrew_id(class_id) {
            match self.srd.get_class_levels(class_id).await {
                Ok(dtos) => {
                    let mut srd: Vec<ClassLevel> =
                        dtos.iter().map(|dto| self.schema.map_dto(dto)).collect();
                    srd.sort_by_key(|l| l.level);
                    levels.extend(srd);
                }
                Err(RepoError::Api(e)) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        let mut homebrew: Vec<ClassLevel> = self
            .homebrew
            .get_all_records::<ClassLevelRecord>(self.schema.resource_type())?
            .iter()
            .filter(|r| r.class.id == class_id)
            .map(|r| self.schema.map_record(r))
            .collect();
        homebrew.sort_by_key(|l| l.level);
        levels.extend(homebrew);

        Ok(levels)
    }

    pub async fn get_by_class_and_level(
        &self,
        class_id: &str,
        level: u8,
    ) -> Result<Option<ClassLevel>, RepoError> {
        Ok(self
            .get_by_class(class_id)
            .await?
            .into_iter()
            .find(|l| l.level == level))
    }
}
