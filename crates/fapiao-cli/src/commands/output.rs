//! Output formatting shared by the process and batch commands.

use fapiao_core::LineItemRecord;

/// Column headers of the exported table, matching the source invoice
/// layout so the CSV drops straight into a spreadsheet.
pub const CSV_HEADERS: [&str; 9] = [
    "序号",
    "项目名称",
    "规格型号",
    "单位",
    "数量",
    "单价",
    "金额",
    "税率/征收率",
    "税额",
];

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (spreadsheet-ready, Chinese headers)
    Csv,
    /// Plain text summary
    Text,
}

/// Render records in the requested format.
pub fn format_records(records: &[LineItemRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => records_to_csv(records),
        OutputFormat::Text => Ok(records_to_text(records)),
    }
}

/// Serialize records as CSV with the canonical column order.
pub fn records_to_csv(records: &[LineItemRecord]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record([
            record.sequence_number.to_string().as_str(),
            &record.item_name,
            &record.spec_model,
            &record.unit,
            &record.quantity,
            &record.unit_price,
            &record.amount,
            &record.tax_rate,
            &record.tax_amount,
        ])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

fn records_to_text(records: &[LineItemRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:>3}. {} {} | {} x {} @ {} = {} ({} 税 {})\n",
            record.sequence_number,
            record.item_name,
            record.spec_model,
            record.quantity,
            record.unit,
            record.unit_price,
            record.amount,
            record.tax_rate,
            record.tax_amount,
        ));
    }
    out
}

/// Renumber a combined record sequence 1..N, used when merging
/// several documents into one export.
pub fn renumber(records: &mut [LineItemRecord]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.sequence_number = (index + 1) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, seq: u32) -> LineItemRecord {
        LineItemRecord {
            sequence_number: seq,
            item_name: name.to_string(),
            unit: "包".to_string(),
            quantity: "1".to_string(),
            amount: "15.00".to_string(),
            tax_rate: "13%".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let csv = records_to_csv(&[record("打印纸", 1), record("胶带", 2)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("序号"));
        assert!(lines[1].contains("打印纸"));
    }

    #[test]
    fn renumber_is_dense_from_one() {
        let mut records = vec![record("甲", 5), record("乙", 9)];
        renumber(&mut records);
        assert_eq!(records[0].sequence_number, 1);
        assert_eq!(records[1].sequence_number, 2);
    }
}
