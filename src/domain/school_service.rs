use anyhow::Result;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{NewSchool, School};
use crate::storage::SchoolRepository;

#[derive(Clone)]
pub struct SchoolService {
    schools: SchoolRepository,
}

impl SchoolService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            schools: SchoolRepository::new(db),
        }
    }

    pub async fn add_school(&self, new: NewSchool) -> Result<School> {
        info!("Creating school: {}", new.name);
        self.schools.insert(&new).await
    }

    pub async fn get_all_schools(&self) -> Result<Vec<School>> {
        self.schools.find_all().await
    }

    pub async fn school_by_id(&self, id: i64) -> Result<Option<School>> {
        self.schools.find_by_id(id).await
    }

    pub async fn school_by_name(&self, name: &str) -> Result<Option<School>> {
        self.schools.find_by_name(name).await
    }

    /// Full overwrite of the updatable field set (PUT semantics, unlike the
    /// teacher patch). Returns `None` when the school does not exist.
    pub async fn update_school(&self, id: i64, details: NewSchool) -> Result<Option<School>> {
        let Some(mut school) = self.schools.find_by_id(id).await? else {
            return Ok(None);
        };

        school.name = details.name;
        school.address = details.address;
        school.phone_number = details.phone_number;
        school.email = details.email;
        school.principal = details.principal;

        self.schools.update(&school).await?;
        info!("Updated school {id}");
        Ok(Some(school))
    }

    /// Delete by id; cascades to the school's classes
    pub async fn delete_school(&self, id: i64) -> Result<()> {
        self.schools.delete(id).await
    }
}
