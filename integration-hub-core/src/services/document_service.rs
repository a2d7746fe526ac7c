//! ERP document actions
//!
//! Every call goes to the ERP integration endpoint, discriminated by its
//! `action` field (POST) or query parameter (GET).

use std::sync::Arc;

use integration_hub_provider::{CommandRequest, CommandSink, Record, RemoteError};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    DocumentExport, EnrichSummary, ExportedDocument, SYNC_LIMITS, needs_enrichment,
};

/// ERP document service
pub struct DocumentService {
    sink: Arc<dyn CommandSink>,
}

impl DocumentService {
    #[must_use]
    pub fn new(sink: Arc<dyn CommandSink>) -> Self {
        Self { sink }
    }

    /// Pull the latest `limit` documents from the ERP. Returns how many were stored.
    pub async fn sync_documents(&self, limit: u32) -> CoreResult<u64> {
        if !SYNC_LIMITS.contains(&limit) {
            return Err(CoreError::ValidationError(format!(
                "sync limit must be one of {SYNC_LIMITS:?}, got {limit}"
            )));
        }

        let body = self
            .sink
            .post(CommandRequest::action("sync_documents").param("limit", limit))
            .await?;
        let count = self.count(&body)?;
        log::info!("Synced {count} documents (limit {limit})");
        Ok(count)
    }

    /// Drop the locally stored document list. The ERP itself is untouched.
    pub async fn clear_documents(&self) -> CoreResult<u64> {
        let body = self
            .sink
            .post(CommandRequest::action("clear_documents"))
            .await?;
        let count = self.count(&body)?;
        log::info!("Cleared {count} documents");
        Ok(count)
    }

    /// Create a CRM deal from a document. Returns the new deal id.
    pub async fn create_deal(&self, document_id: &str) -> CoreResult<String> {
        let body = self
            .sink
            .post(CommandRequest::action("create_bitrix_deal").param("document_id", document_id))
            .await?;
        let deal_id = body
            .get("deal_id")
            .and_then(integration_hub_provider::scalar_to_string)
            .ok_or_else(|| self.malformed("response has no deal_id"))?;
        log::info!("Created deal {deal_id} from document {document_id}");
        Ok(deal_id)
    }

    /// Whether the CRM still has `deal_id`.
    pub async fn check_deal(&self, deal_id: &str) -> CoreResult<bool> {
        let body = self
            .sink
            .post(CommandRequest::action("check_bitrix_deal").param("deal_id", deal_id))
            .await?;
        Ok(body.get("exists").and_then(Value::as_bool).unwrap_or(false))
    }

    /// Re-check every linked deal against the CRM. Returns the remote summary.
    pub async fn sync_with_crm(&self) -> CoreResult<String> {
        let body = self
            .sink
            .post(CommandRequest::action("sync_with_bitrix"))
            .await?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Fetch full customer data for one document from the ERP.
    pub async fn enrich_document(&self, id: &str) -> CoreResult<()> {
        self.sink
            .get(&[("action", "enrich_document"), ("id", id)])
            .await?;
        Ok(())
    }

    /// Enrich, one by one, every document whose customer data is incomplete.
    ///
    /// Failures are counted, not returned. With no candidate nothing is sent.
    pub async fn enrich_all(&self, documents: &[Record]) -> EnrichSummary {
        let mut summary = EnrichSummary::default();
        for doc in documents.iter().filter(|d| needs_enrichment(d)) {
            match self.enrich_document(&doc.id).await {
                Ok(()) => summary.success_count += 1,
                Err(e) => {
                    log::warn!("Failed to enrich document {}: {e}", doc.id);
                    summary.error_count += 1;
                }
            }
        }
        if summary.total() > 0 {
            log::info!(
                "Enriched {} documents, {} failed",
                summary.success_count,
                summary.error_count
            );
        }
        summary
    }

    /// Render the export file of one document.
    pub fn export_document(document: &Record) -> CoreResult<ExportedDocument> {
        let export = DocumentExport::from_record(document);
        let content = serde_json::to_string_pretty(&export)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        Ok(ExportedDocument {
            file_name: export.file_name(),
            content,
        })
    }

    fn count(&self, body: &Value) -> CoreResult<u64> {
        body.get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| self.malformed("response has no count"))
    }

    fn malformed(&self, detail: &str) -> CoreError {
        CoreError::Remote(RemoteError::MalformedResponse {
            source: self.sink.name().to_string(),
            detail: detail.to_string(),
        })
    }
}
