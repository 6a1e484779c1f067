use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Состояние чекбокса "выбрать все" в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Набор выбранных идентификаторов записей.
///
/// Хранится независимо от фильтров: "выбрать все" и "снять все" затрагивают
/// только переданный (отфильтрованный) набор идентификаторов.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Переключить одну запись; возвращает новое состояние
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Выбрать все записи текущего отфильтрованного набора
    pub fn select_all<'a>(&mut self, filtered_ids: impl IntoIterator<Item = &'a str>) {
        for id in filtered_ids {
            self.ids.insert(id.to_string());
        }
    }

    /// Снять выбор только с записей отфильтрованного набора
    pub fn clear_all<'a>(&mut self, filtered_ids: impl IntoIterator<Item = &'a str>) {
        for id in filtered_ids {
            self.ids.remove(id);
        }
    }

    /// Состояние заголовка: пересечение выбора с отфильтрованным набором
    pub fn header_state<'a>(
        &self,
        filtered_ids: impl IntoIterator<Item = &'a str>,
    ) -> HeaderCheckState {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in filtered_ids {
            total += 1;
            if self.ids.contains(id) {
                selected += 1;
            }
        }

        if selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids.into_iter().collect()
    }
}
