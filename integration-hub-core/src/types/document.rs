//! ERP document command results

use integration_hub_provider::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for documents without a CRM deal.
pub const NOT_SYNCED: &str = "not synced";

/// Allowed `sync_documents` batch sizes
pub const SYNC_LIMITS: [u32; 5] = [5, 10, 20, 50, 100];

/// Outcome of enriching several documents in a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichSummary {
    pub success_count: usize,
    pub error_count: usize,
}

impl EnrichSummary {
    pub fn total(&self) -> usize {
        self.success_count + self.error_count
    }
}

/// Summary of one document as written to `document_<number>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExport {
    pub number: String,
    pub date: Value,
    pub customer: Value,
    pub order_status: Value,
    pub order_type: Value,
    pub author: Value,
    pub sum: Value,
    pub crm_deal_id: String,
    pub erp_uid: Value,
}

impl DocumentExport {
    pub fn from_record(record: &Record) -> Self {
        let field = |path: &str| record.field(path).cloned().unwrap_or(Value::Null);
        let number = record
            .field_str("document_number")
            .unwrap_or_else(|| record.id.clone());
        let crm_deal_id = record
            .field_str("bitrix_deal_id")
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| NOT_SYNCED.to_string());

        Self {
            number,
            date: field("document_date"),
            customer: field("customer_name"),
            order_status: field("order_status"),
            order_type: field("order_type"),
            author: field("author"),
            sum: field("document_sum"),
            crm_deal_id,
            erp_uid: field("document_uid"),
        }
    }

    /// Export file name. Path separators in the number are replaced.
    pub fn file_name(&self) -> String {
        let safe: String = self
            .number
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        format!("document_{safe}.json")
    }
}

/// Export file contents, ready to be written by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content: String,
}

/// Whether a document still lacks the customer data the ERP can fill in.
pub fn needs_enrichment(record: &Record) -> bool {
    record
        .field_str("customer_name")
        .is_none_or(|name| name.chars().count() < 10)
}
