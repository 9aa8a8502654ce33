//! `SeaORM` entities.

pub mod estudiantes;
pub mod sequences;
