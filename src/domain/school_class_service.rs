use anyhow::Result;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{NewSchoolClass, SchoolClass};
use crate::storage::SchoolClassRepository;

#[derive(Clone)]
pub struct SchoolClassService {
    classes: SchoolClassRepository,
}

impl SchoolClassService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            classes: SchoolClassRepository::new(db),
        }
    }

    pub async fn add_school_class(&self, new: NewSchoolClass) -> Result<SchoolClass> {
        info!("Creating class: {} (school {})", new.class_name, new.school_id);
        self.classes.insert(&new).await
    }

    pub async fn get_all_school_classes(&self) -> Result<Vec<SchoolClass>> {
        self.classes.find_all().await
    }

    pub async fn school_class_by_id(&self, id: i64) -> Result<Option<SchoolClass>> {
        self.classes.find_by_id(id).await
    }

    pub async fn classes_by_school(&self, school_id: i64) -> Result<Vec<SchoolClass>> {
        self.classes.find_by_school(school_id).await
    }

    pub async fn class_by_name_and_school(
        &self,
        class_name: &str,
        school_id: i64,
    ) -> Result<Option<SchoolClass>> {
        self.classes.find_by_name_and_school(class_name, school_id).await
    }

    /// Full overwrite of name, class teacher, and capacity (PUT semantics).
    /// Returns `None` when the class does not exist.
    pub async fn update_school_class(
        &self,
        id: i64,
        details: NewSchoolClass,
    ) -> Result<Option<SchoolClass>> {
        let Some(mut class) = self.classes.find_by_id(id).await? else {
            return Ok(None);
        };

        class.class_name = details.class_name;
        class.class_teacher_id = details.class_teacher_id;
        class.capacity = details.capacity;

        self.classes.update(&class).await?;
        info!("Updated class {id}");
        Ok(Some(class))
    }

    /// Delete by id; cascades to the class's sections
    pub async fn delete_school_class(&self, id: i64) -> Result<()> {
        self.classes.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewClassSection, NewSchool};
    use crate::storage::{ClassSectionRepository, SchoolRepository};

    async fn setup_test() -> (SchoolClassService, DbConnection, i64) {
        let db = DbConnection::init_test().await.expect("test db");
        let school = SchoolRepository::new(db.clone())
            .insert(&NewSchool {
                name: "Lincoln High".to_string(),
                address: None,
                phone_number: None,
                email: None,
                principal: None,
            })
            .await
            .unwrap();
        (SchoolClassService::new(db.clone()), db, school.id)
    }

    #[tokio::test]
    async fn test_update_overwrites_even_with_nulls() {
        let (service, _db, school_id) = setup_test().await;
        let class = service
            .add_school_class(NewSchoolClass {
                class_name: "Grade 10".to_string(),
                capacity: Some(40),
                school_id,
                class_teacher_id: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_school_class(
                class.id,
                NewSchoolClass {
                    class_name: "Grade 11".to_string(),
                    capacity: None,
                    school_id,
                    class_teacher_id: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.class_name, "Grade 11");
        assert_eq!(updated.capacity, None);
    }

    #[tokio::test]
    async fn test_update_missing_class_returns_none() {
        let (service, _db, school_id) = setup_test().await;

        let result = service
            .update_school_class(
                7,
                NewSchoolClass {
                    class_name: "Grade 12".to_string(),
                    capacity: None,
                    school_id,
                    class_teacher_id: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_sections() {
        let (service, db, school_id) = setup_test().await;
        let class = service
            .add_school_class(NewSchoolClass {
                class_name: "Grade 10".to_string(),
                capacity: None,
                school_id,
                class_teacher_id: None,
            })
            .await
            .unwrap();

        let sections = ClassSectionRepository::new(db);
        sections
            .insert(&NewClassSection {
                section_name: "A".to_string(),
                strength: None,
                school_class_id: class.id,
                section_teacher_id: None,
            })
            .await
            .unwrap();

        service.delete_school_class(class.id).await.unwrap();

        assert!(sections
            .find_by_school_class(class.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_class_by_name_and_school() {
        let (service, _db, school_id) = setup_test().await;
        service
            .add_school_class(NewSchoolClass {
                class_name: "Grade 10".to_string(),
                capacity: None,
                school_id,
                class_teacher_id: None,
            })
            .await
            .unwrap();

        assert!(service
            .class_by_name_and_school("Grade 10", school_id)
            .await
            .unwrap()
            .is_some());
        assert!(service
            .class_by_name_and_school("Grade 10", school_id + 1)
            .await
            .unwrap()
            .is_none());
    }
}
