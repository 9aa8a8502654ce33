//! Request extractors.

mod student_form;

pub use student_form::StudentFormData;
