use charsmith_domain::ResourceList;

use crate::infrastructure::ports::RepoError;
use crate::repositories::resource::BaseResourceRepository;
use crate::repositories::schema::WeaponSchema;

pub type WeaponRepository = BaseResourceRepository<WeaponSchema>;

impl BaseResourceRepository<WeaponSchema> {
    /// SRD weapons (via the `weapon` equipment category) followed by homebrew weapons.
    pub async fn get_all_weapons(&self) -> Result<ResourceList, RepoError> {
        self.get_all().await
    }
}
