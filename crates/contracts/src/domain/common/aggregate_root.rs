use super::{BaseAggregate, EntityMetadata};
use crate::shared::record_view::Tabular;

/// Трейт для записи модуля
///
/// Определяет доступ к общим полям и статические метаданные модуля
pub trait AggregateRoot: Tabular {
    fn base(&self) -> &BaseAggregate;

    fn base_mut(&mut self) -> &mut BaseAggregate;

    /// Проверка полей перед сохранением
    fn validate(&self) -> Result<(), String>;

    // ============================================================================
    // Метаданные модуля (статические данные)
    // ============================================================================

    /// Индекс модуля в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "land_parcel")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Land parcel")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Land Parcels")
    fn list_name() -> &'static str;

    /// Основа имени файла экспорта (например, "land-parcels")
    fn export_slug() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    fn code(&self) -> &str {
        &self.base().code
    }

    fn description(&self) -> &str {
        &self.base().description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base().metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base_mut().metadata
    }

    /// Полное имя модуля (например, "a001_land_parcel")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Сегмент пути API (например, "land-parcel")
    fn route_segment() -> String {
        Self::collection_name().replace('_', "-")
    }
}
