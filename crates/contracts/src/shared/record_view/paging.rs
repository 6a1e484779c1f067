use serde::{Deserialize, Serialize};

use super::query::DEFAULT_PAGE_SIZE;

/// Окно страницы после ограничения номера страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Фактический номер страницы (1..=total_pages, либо 1 для пустого списка)
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// Начало среза (включительно)
    pub start: usize,
    /// Конец среза (не включительно)
    pub end: usize,
}

impl PageWindow {
    /// Номер страницы за пределами списка приводится к последней странице,
    /// ноль к первой. Нулевой размер страницы заменяется размером по умолчанию.
    pub fn clamp(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let total_pages = total.div_ceil(page_size);
        let page = page.max(1).min(total_pages.max(1));
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);

        Self {
            page,
            page_size,
            total,
            total_pages,
            start,
            end,
        }
    }

    /// Первая показанная позиция для "Показано X–Y из Z" (0 для пустого списка)
    pub fn showing_from(&self) -> usize {
        if self.start == self.end {
            0
        } else {
            self.start + 1
        }
    }

    pub fn showing_to(&self) -> usize {
        self.end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start.min(items.len())..self.end.min(items.len())]
    }
}
