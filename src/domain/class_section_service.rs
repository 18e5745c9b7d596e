use anyhow::Result;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{ClassSection, NewClassSection};
use crate::storage::ClassSectionRepository;

#[derive(Clone)]
pub struct ClassSectionService {
    sections: ClassSectionRepository,
}

impl ClassSectionService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            sections: ClassSectionRepository::new(db),
        }
    }

    pub async fn add_class_section(&self, new: NewClassSection) -> Result<ClassSection> {
        info!(
            "Creating section: {} (class {})",
            new.section_name, new.school_class_id
        );
        self.sections.insert(&new).await
    }

    pub async fn get_all_class_sections(&self) -> Result<Vec<ClassSection>> {
        self.sections.find_all().await
    }

    pub async fn class_section_by_id(&self, id: i64) -> Result<Option<ClassSection>> {
        self.sections.find_by_id(id).await
    }

    pub async fn sections_by_school_class(&self, school_class_id: i64) -> Result<Vec<ClassSection>> {
        self.sections.find_by_school_class(school_class_id).await
    }

    pub async fn section_by_name_and_class(
        &self,
        section_name: &str,
        school_class_id: i64,
    ) -> Result<Option<ClassSection>> {
        self.sections
            .find_by_name_and_class(section_name, school_class_id)
            .await
    }

    /// Full overwrite of name, section teacher, and strength (PUT
    /// semantics). Returns `None` when the section does not exist.
    pub async fn update_class_section(
        &self,
        id: i64,
        details: NewClassSection,
    ) -> Result<Option<ClassSection>> {
        let Some(mut section) = self.sections.find_by_id(id).await? else {
            return Ok(None);
        };

        section.section_name = details.section_name;
        section.section_teacher_id = details.section_teacher_id;
        section.strength = details.strength;

        self.sections.update(&section).await?;
        info!("Updated section {id}");
        Ok(Some(section))
    }

    /// Delete by id; cascades to the section's students
    pub async fn delete_class_section(&self, id: i64) -> Result<()> {
        self.sections.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewSchool, NewSchoolClass, NewStudent};
    use crate::storage::{SchoolClassRepository, SchoolRepository, StudentRepository};

    async fn setup_test() -> (ClassSectionService, DbConnection, i64) {
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
        let class = SchoolClassRepository::new(db.clone())
            .insert(&NewSchoolClass {
                class_name: "Grade 10".to_string(),
                capacity: None,
                school_id: school.id,
                class_teacher_id: None,
            })
            .await
            .unwrap();
        (ClassSectionService::new(db.clone()), db, class.id)
    }

    #[tokio::test]
    async fn test_update_is_full_overwrite() {
        let (service, _db, class_id) = setup_test().await;
        let section = service
            .add_class_section(NewClassSection {
                section_name: "A".to_string(),
                strength: Some(30),
                school_class_id: class_id,
                section_teacher_id: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_class_section(
                section.id,
                NewClassSection {
                    section_name: "B".to_string(),
                    strength: None,
                    school_class_id: class_id,
                    section_teacher_id: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.section_name, "B");
        assert_eq!(updated.strength, None);
    }

    #[tokio::test]
    async fn test_update_missing_section_returns_none() {
        let (service, _db, class_id) = setup_test().await;

        let result = service
            .update_class_section(
                11,
                NewClassSection {
                    section_name: "Z".to_string(),
                    strength: None,
                    school_class_id: class_id,
                    section_teacher_id: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_students() {
        let (service, db, class_id) = setup_test().await;
        let section = service
            .add_class_section(NewClassSection {
                section_name: "A".to_string(),
                strength: None,
                school_class_id: class_id,
                section_teacher_id: None,
            })
            .await
            .unwrap();

        let students = StudentRepository::new(db);
        let student = students
            .insert(&NewStudent {
                name: Some("J. Lee".to_string()),
                roll_number: "S100".to_string(),
                email: None,
                phone_number: None,
                address: None,
                class_section_id: Some(section.id),
            })
            .await
            .unwrap();

        service.delete_class_section(section.id).await.unwrap();

        assert!(students.find_by_id(student.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_section_by_name_and_class() {
        let (service, _db, class_id) = setup_test().await;
        service
            .add_class_section(NewClassSection {
                section_name: "A".to_string(),
                strength: None,
                school_class_id: class_id,
                section_teacher_id: None,
            })
            .await
            .unwrap();

        assert!(service
            .section_by_name_and_class("A", class_id)
            .await
            .unwrap()
            .is_some());
        assert!(service
            .section_by_name_and_class("B", class_id)
            .await
            .unwrap()
            .is_none());
    }
}
