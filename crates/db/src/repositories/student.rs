//! Student repository for database operations.
//!
//! Implements student CRUD operations using SeaORM.

use std::sync::Arc;

use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::estudiantes;
use estudiantes_core::student::{
    PhotoRef, Student, StudentError, StudentFields, StudentRepository as StudentRepoTrait,
};

/// Student repository implementation.
#[derive(Debug)]
pub struct StudentRepository {
    db: Arc<DatabaseConnection>,
}

impl StudentRepository {
    /// Create a new student repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl StudentRepoTrait for StudentRepository {
    async fn list(&self) -> Result<Vec<Student>, StudentError> {
        let models = estudiantes::Entity::find()
            .order_by_asc(estudiantes::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StudentError> {
        let model = estudiantes::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?;

        Ok(model.map(to_domain))
    }

    async fn insert(&self, student: Student) -> Result<(), StudentError> {
        let active_model = estudiantes::ActiveModel {
            id: Set(student.id),
            nombre: Set(student.fields.name),
            edad: Set(student.fields.age),
            dni: Set(student.fields.national_id),
            telefono: Set(student.fields.phone),
            grado: Set(student.fields.grade),
            imagen: Set(student.image_key),
            imagen_url: Set(student.image_url),
            created_at: NotSet,
        };

        estudiantes::Entity::insert(active_model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        id: i64,
        fields: StudentFields,
        photo: Option<PhotoRef>,
    ) -> Result<u64, StudentError> {
        let mut changes = estudiantes::ActiveModel {
            nombre: Set(fields.name),
            edad: Set(fields.age),
            dni: Set(fields.national_id),
            telefono: Set(fields.phone),
            grado: Set(fields.grade),
            ..Default::default()
        };
        if let Some(photo) = photo {
            changes.imagen = Set(Some(photo.key));
            changes.imagen_url = Set(Some(photo.url));
        }

        let result = estudiantes::Entity::update_many()
            .set(changes)
            .filter(estudiantes::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i64) -> Result<bool, StudentError> {
        let result = estudiantes::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert database model to domain model.
fn to_domain(model: estudiantes::Model) -> Student {
    Student {
        id: model.id,
        fields: StudentFields {
            name: model.nombre,
            age: model.edad,
            national_id: model.dni,
            phone: model.telefono,
            grade: model.grado,
        },
        image_key: model.imagen,
        image_url: model.imagen_url,
    }
}
