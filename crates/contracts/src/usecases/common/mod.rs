//! Common types for use cases

pub mod usecase_error;

pub use usecase_error::{FieldError, UseCaseError, UseCaseResult};

/// Метаданные UseCase для идентификации в логах и маршрутах
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "submit_contact")
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    /// Полное имя вида "u501_submit_contact"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
