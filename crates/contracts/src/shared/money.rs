//! Денежные суммы в минимальных единицах (пайсы) с кодом валюты.
//!
//! Форматирование выполняется только на границе представления:
//! индийская группировка разрядов (`₹45,00,000`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Валюта суммы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// Количество минимальных единиц в одной основной
    pub fn minor_per_major(&self) -> i64 {
        match self {
            Currency::Inr => 100,
        }
    }
}

/// Денежная сумма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Money {
    /// Сумма в минимальных единицах валюты
    pub amount_minor: i64,
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn from_minor(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Сумма в целых рупиях
    pub fn inr(rupees: i64) -> Self {
        Self::from_minor(
            rupees.saturating_mul(Currency::Inr.minor_per_major()),
            Currency::Inr,
        )
    }

    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Сложение с насыщением. Суммы в разных валютах не складываются.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Self::from_minor(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        ))
    }

    /// Отображаемое значение, например `₹45,00,000` или `-₹1,250.50`
    pub fn format(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let abs = self.amount_minor.unsigned_abs();
        let major = abs / per_major as u64;
        let minor = abs % per_major as u64;

        let mut out = String::new();
        if self.amount_minor < 0 {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(&group_indian(&major.to_string()));
        if minor != 0 {
            out.push_str(&format!(".{:02}", minor));
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Индийская группировка: последние три цифры, далее группы по две.
///
/// ```
/// use contracts::shared::money::group_indian;
/// assert_eq!(group_indian("4500000"), "45,00,000");
/// assert_eq!(group_indian("999"), "999");
/// ```
pub fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Разбор суммы из отформатированной строки для сортировки.
///
/// Удаляются все символы, кроме цифр; остаток разбирается как целое.
/// Пустой остаток или переполнение дают 0, ошибка не возникает никогда.
pub fn parse_amount_lenient(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().unwrap_or(0)
}
