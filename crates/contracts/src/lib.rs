//! Общие типы MIS ERP: записи модулей, конвейер представления списка,
//! деньги, экспорт CSV и диспетчеризация действий над строками.
//!
//! Всё в этом crate синхронно и не выполняет ввода-вывода.

pub mod domain;
pub mod shared;
