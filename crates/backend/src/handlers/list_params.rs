use std::fmt;
use std::str::FromStr;

use axum::extract::Query;
use axum::http::Uri;
use chrono::NaiveDate;
use contracts::shared::record_view::{FacetFilter, Selection, SortSpec, Tabular, ViewQuery};
use serde::{de, Deserialize, Deserializer};

use crate::shared::api_error::ApiError;

/// Скалярные параметры списка. Пустое значение равно отсутствующему.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date_field: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date_to: Option<NaiveDate>,
    /// `date_desc` или `amount_desc`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<usize>,
}

/// Параметры списка из строки запроса.
///
/// `facet` повторяется и имеет вид `field:value`; `selected` - идентификаторы
/// через запятую, ключ может повторяться. Неизвестные ключи игнорируются.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub query: ListQuery,
    pub facets: Vec<(String, String)>,
    pub selected: Vec<String>,
}

impl ListParams {
    pub fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        let Query(query) = Query::<ListQuery>::try_from_uri(uri)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let mut params = ListParams {
            query,
            ..ListParams::default()
        };
        for (key, value) in pairs {
            match key.as_str() {
                "facet" => {
                    let (field, val) = value.split_once(':').ok_or_else(|| {
                        ApiError::BadRequest(format!(
                            "Facet '{}' must have the form field:value",
                            value
                        ))
                    })?;
                    params.facets.push((field.trim().to_string(), val.to_string()));
                }
                "selected" => params.selected.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(String::from),
                ),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Запрос представления для записей типа `T`
    pub fn to_query<T: Tabular>(&self) -> Result<ViewQuery, ApiError> {
        let mut query = ViewQuery {
            search: self.query.search.clone(),
            page: self.query.page.unwrap_or(1),
            // 0 = размер по умолчанию из конфигурации
            page_size: self.query.page_size.unwrap_or(0),
            ..ViewQuery::default()
        };

        for (field, value) in &self.facets {
            query
                .facets
                .push(FacetFilter::equals(field.clone(), value.clone()));
        }

        let (date_from, date_to) = (self.query.date_from, self.query.date_to);
        if date_from.is_some() || date_to.is_some() {
            let field = self.date_field_for::<T>()?;
            query
                .facets
                .push(FacetFilter::date_range(field, date_from, date_to));
        }

        query.sort = match self.query.sort.as_deref() {
            None => None,
            Some("date_desc") => Some(SortSpec::DateDesc {
                field: self.date_field_for::<T>()?,
            }),
            Some("amount_desc") => Some(SortSpec::AmountDesc {
                field: T::amount_column()
                    .ok_or_else(|| ApiError::BadRequest("This list has no amount column".into()))?
                    .to_string(),
            }),
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "Unknown sort '{}', expected date_desc or amount_desc",
                    other
                )))
            }
        };

        Ok(query)
    }

    pub fn selection(&self) -> Selection {
        Selection::from_ids(self.selected.iter().cloned())
    }

    fn date_field_for<T: Tabular>(&self) -> Result<String, ApiError> {
        self.query
            .date_field
            .clone()
            .or_else(|| T::date_column().map(String::from))
            .ok_or_else(|| ApiError::BadRequest("This list has no date column".into()))
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
