use anyhow::Result;

use crate::db::DbConnection;
use crate::models::{ClassSection, NewClassSection};

#[derive(Clone)]
pub struct ClassSectionRepository {
    db: DbConnection,
}

impl ClassSectionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new section; fails if the owning class does not exist
    pub async fn insert(&self, new: &NewClassSection) -> Result<ClassSection> {
        let result = sqlx::query(
            "INSERT INTO class_sections (section_name, strength, school_class_id, section_teacher_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&new.section_name)
        .bind(new.strength)
        .bind(new.school_class_id)
        .bind(new.section_teacher_id)
        .execute(self.db.pool())
        .await?;

        Ok(ClassSection {
            id: result.last_insert_rowid(),
            section_name: new.section_name.clone(),
            strength: new.strength,
            school_class_id: new.school_class_id,
            section_teacher_id: new.section_teacher_id,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<ClassSection>> {
        let sections = sqlx::query_as::<_, ClassSection>("SELECT * FROM class_sections ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(sections)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ClassSection>> {
        let section = sqlx::query_as::<_, ClassSection>("SELECT * FROM class_sections WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(section)
    }

    pub async fn find_by_school_class(&self, school_class_id: i64) -> Result<Vec<ClassSection>> {
        let sections = sqlx::query_as::<_, ClassSection>(
            "SELECT * FROM class_sections WHERE school_class_id = ? ORDER BY id",
        )
        .bind(school_class_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(sections)
    }

    pub async fn find_by_name_and_class(
        &self,
        section_name: &str,
        school_class_id: i64,
    ) -> Result<Option<ClassSection>> {
        let section = sqlx::query_as::<_, ClassSection>(
            "SELECT * FROM class_sections WHERE section_name = ? AND school_class_id = ?",
        )
        .bind(section_name)
        .bind(school_class_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(section)
    }

    /// Overwrite the updatable fields (name, teacher, strength); the owning
    /// class never changes on update
    pub async fn update(&self, section: &ClassSection) -> Result<()> {
        sqlx::query(
            "UPDATE class_sections
             SET section_name = ?, section_teacher_id = ?, strength = ?
             WHERE id = ?",
        )
        .bind(&section.section_name)
        .bind(section.section_teacher_id)
        .bind(section.strength)
        .bind(section.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a section; its students go with it via the cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM class_sections WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}
