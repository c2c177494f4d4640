//! Partition writer
//!
//! Sorts each company's records and renders the text of its output file.
//! Writing the text to disk is left to [`crate::adapters::filesystem`].

use crate::core::ingest::CompanyPartition;
use crate::domain::Record;
use std::cmp::Ordering;

/// Extension given to every company file
pub const OUTPUT_EXTENSION: &str = "csv";

/// Rendered output for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyOutput {
    pub company: String,
    /// `{company}.csv`
    pub file_name: String,
    /// Records joined by `\n` with no trailing newline
    pub contents: String,
    pub record_count: usize,
}

/// Renders every company in the partition, in company name order
pub fn partition(companies: CompanyPartition) -> Vec<CompanyOutput> {
    companies
        .into_companies()
        .map(|(company, mut records)| {
            let contents = render_company(&mut records);
            CompanyOutput {
                file_name: output_file_name(&company),
                record_count: records.len(),
                company,
                contents,
            }
        })
        .collect()
}

/// Sorts records in place and joins their serialized lines
pub fn render_company(records: &mut [Record]) -> String {
    sort_records(records);
    records
        .iter()
        .map(serialize_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sorts by the byte-wise concatenation `last_name + first_name`
///
/// Records whose keys are equal fall back to user id so the output does not
/// depend on hash order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| compare_names(a, b).then_with(|| a.user_id.cmp(&b.user_id)));
}

fn compare_names(a: &Record, b: &Record) -> Ordering {
    let a_key = a.last_name.bytes().chain(a.first_name.bytes());
    let b_key = b.last_name.bytes().chain(b.first_name.bytes());
    a_key.cmp(b_key)
}

/// `userId,firstName lastName,version,company`
pub fn serialize_record(record: &Record) -> String {
    format!(
        "{},{} {},{},{}",
        record.user_id, record.first_name, record.last_name, record.version, record.company
    )
}

pub fn output_file_name(company: &str) -> String {
    format!("{company}.{OUTPUT_EXTENSION}")
}
