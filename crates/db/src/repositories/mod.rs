//! Repository abstractions for data access.
//!
//! Repositories implement the persistence traits from `estudiantes-core`,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod sequence;
pub mod student;

pub use sequence::SequenceRepository;
pub use student::StudentRepository;
