use serde::{Deserialize, Serialize};

use crate::shared::money::{Currency, Money};
use crate::shared::record_view::{CellValue, Tabular};

/// Карточка сводки для шапки страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Распределение записей по значениям одной фасетной колонки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBreakdown {
    pub field: String,
    pub label: String,
    /// В порядке первого появления значения
    pub counts: Vec<FacetCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub total: usize,
    pub amount_total: Option<Money>,
    pub breakdowns: Vec<FacetBreakdown>,
    pub cards: Vec<StatCard>,
}

/// Сводка по всему источнику записей
pub fn summarize<T: Tabular>(records: &[T]) -> ModuleSummary {
    let breakdowns: Vec<FacetBreakdown> = T::columns()
        .iter()
        .filter(|c| c.facet)
        .map(|col| {
            let mut counts: Vec<FacetCount> = Vec::new();
            for record in records {
                let value = record.cell(col.id).to_text();
                match counts.iter_mut().find(|c| c.value == value) {
                    Some(existing) => existing.count += 1,
                    None => counts.push(FacetCount { value, count: 1 }),
                }
            }
            FacetBreakdown {
                field: col.id.to_string(),
                label: col.label.to_string(),
                counts,
            }
        })
        .collect();

    let amount_total = T::amount_column().map(|field| {
        records
            .iter()
            .filter_map(|r| match r.cell(field) {
                CellValue::Money(m) => Some(m),
                _ => None,
            })
            .fold(Money::zero(Currency::Inr), |acc, m| {
                acc.checked_add(m).unwrap_or(acc)
            })
    });

    let mut cards = vec![StatCard {
        label: "Total".to_string(),
        value: records.len().to_string(),
    }];
    if let Some(status) = breakdowns.iter().find(|b| b.field == "status") {
        cards.extend(status.counts.iter().map(|c| StatCard {
            label: c.value.clone(),
            value: c.count.to_string(),
        }));
    }
    if let (Some(total), Some(field)) = (amount_total, T::amount_column()) {
        let label = T::find_column(field).map_or(field, |c| c.label);
        cards.push(StatCard {
            label: format!("Total {}", label),
            value: total.format(),
        });
    }

    ModuleSummary {
        total: records.len(),
        amount_total,
        breakdowns,
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_view::test_support::parcels;

    #[test]
    fn test_summary_counts_and_total() {
        let summary = summarize(&parcels());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.amount_total, Some(Money::inr(9_750_000)));

        let status = summary
            .breakdowns
            .iter()
            .find(|b| b.field == "status")
            .unwrap();
        let counts: Vec<(&str, usize)> = status
            .counts
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(counts, vec![("Acquired", 2), ("In Progress", 2), ("Pending", 1)]);

        assert_eq!(summary.cards.first().map(|c| c.value.as_str()), Some("5"));
        assert_eq!(
            summary.cards.last().map(|c| c.value.as_str()),
            Some("₹97,50,000")
        );
    }

    #[test]
    fn test_summary_of_empty_source() {
        let summary = summarize::<crate::shared::record_view::test_support::Parcel>(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.amount_total, Some(Money::zero(Currency::Inr)));
        assert!(summary.breakdowns.iter().all(|b| b.counts.is_empty()));
    }
}
