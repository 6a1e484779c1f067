//! Экспорт отфильтрованного списка в CSV
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::shared::record_view::Tabular;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Параметры экспорта
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Добавить UTF-8 BOM для корректного открытия в Excel
    pub utf8_bom: bool,
}

/// Формирует CSV: строка заголовков, затем переданные записи.
///
/// Поля с запятой, кавычкой или переводом строки заключаются в кавычки,
/// кавычки внутри значения удваиваются. Пустой список даёт только заголовок.
pub fn export_csv<T: Tabular>(records: &[&T], options: ExportOptions) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(T::columns().iter().map(|c| c.label))?;
    for record in records {
        writer.write_record(record.cells().iter().map(|cell| cell.to_text()))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let body = String::from_utf8(bytes)?;

    if options.utf8_bom {
        Ok(format!("\u{FEFF}{}", body))
    } else {
        Ok(body)
    }
}

/// Имя файла экспорта: `<slug>.csv` или `<slug>-YYYY-MM-DD.csv`
pub fn export_filename(slug: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{}-{}.csv", slug, d.format("%Y-%m-%d")),
        None => format!("{}.csv", slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_view::test_support::{parcel, parcels, Parcel};

    #[test]
    fn test_header_and_rows() {
        let data = parcels();
        let rows: Vec<&Parcel> = data.iter().take(1).collect();
        let csv = export_csv(&rows, ExportOptions::default()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Parcel ID,Location,Village,Status,Notified On,Compensation")
        );
        assert_eq!(
            lines.next(),
            Some("PAR-001,\"Gomti Nagar, Lucknow\",Ujariyaon,Acquired,2024-01-20,\"₹45,00,000\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let tricky = parcel(
            "PAR-042",
            "Foundation Work, Block A",
            "He said \"phase 2\"",
            "Pending",
            (2024, 5, 1),
            1_000,
        );
        let csv = export_csv(&[&tricky], ExportOptions::default()).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "Foundation Work, Block A");
        assert_eq!(&records[0][2], "He said \"phase 2\"");
        assert_eq!(&records[0][5], "₹1,000");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let csv = export_csv::<Parcel>(&[], ExportOptions::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_bom() {
        let csv = export_csv::<Parcel>(&[], ExportOptions { utf8_bom: true }).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
    }

    #[test]
    fn test_filename() {
        assert_eq!(export_filename("land-parcels", None), "land-parcels.csv");
        let d = NaiveDate::from_ymd_opt(2024, 7, 1);
        assert_eq!(export_filename("land-parcels", d), "land-parcels-2024-07-01.csv");
    }
}
