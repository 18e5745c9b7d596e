use anyhow::Result;

use crate::db::DbConnection;
use crate::models::{NewSchoolClass, SchoolClass};

#[derive(Clone)]
pub struct SchoolClassRepository {
    db: DbConnection,
}

impl SchoolClassRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new class; fails if the owning school does not exist
    pub async fn insert(&self, new: &NewSchoolClass) -> Result<SchoolClass> {
        let result = sqlx::query(
            "INSERT INTO school_classes (class_name, capacity, school_id, class_teacher_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&new.class_name)
        .bind(new.capacity)
        .bind(new.school_id)
        .bind(new.class_teacher_id)
        .execute(self.db.pool())
        .await?;

        Ok(SchoolClass {
            id: result.last_insert_rowid(),
            class_name: new.class_name.clone(),
            capacity: new.capacity,
            school_id: new.school_id,
            class_teacher_id: new.class_teacher_id,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<SchoolClass>> {
        let classes = sqlx::query_as::<_, SchoolClass>("SELECT * FROM school_classes ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(classes)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<SchoolClass>> {
        let class = sqlx::query_as::<_, SchoolClass>("SELECT * FROM school_classes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(class)
    }

    pub async fn find_by_school(&self, school_id: i64) -> Result<Vec<SchoolClass>> {
        let classes = sqlx::query_as::<_, SchoolClass>(
            "SELECT * FROM school_classes WHERE school_id = ? ORDER BY id",
        )
        .bind(school_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(classes)
    }

    pub async fn find_by_name_and_school(
        &self,
        class_name: &str,
        school_id: i64,
    ) -> Result<Option<SchoolClass>> {
        let class = sqlx::query_as::<_, SchoolClass>(
            "SELECT * FROM school_classes WHERE class_name = ? AND school_id = ?",
        )
        .bind(class_name)
        .bind(school_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(class)
    }

    /// Overwrite the updatable fields (name, teacher, capacity); the owning
    /// school never changes on update
    pub async fn update(&self, class: &SchoolClass) -> Result<()> {
        sqlx::query(
            "UPDATE school_classes
             SET class_name = ?, class_teacher_id = ?, capacity = ?
             WHERE id = ?",
        )
        .bind(&class.class_name)
        .bind(class.class_teacher_id)
        .bind(class.capacity)
        .bind(class.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM school_classes WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}
