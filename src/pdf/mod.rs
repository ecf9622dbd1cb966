//! PDF output for invoice layouts.
//!
//! [`generate_document`] lays out and serializes one invoice;
//! [`save_document`] also writes it as `Invoice_<number>.pdf`.

mod render;

use std::path::{Path, PathBuf};

use tracing::info;

pub use render::render_pdf;

use crate::core::{Bill, BillingConfig, BillingError};
use crate::layout::{InvoiceDocument, layout_invoice};

/// Lay out and serialize an invoice. Performs no precondition checks.
pub fn generate_document(
    doc: &InvoiceDocument<'_>,
    config: &BillingConfig,
) -> Result<Vec<u8>, BillingError> {
    let layout = layout_invoice(doc, config);
    let bytes = render_pdf(&layout)?;
    info!(
        number = %doc.identity.number,
        items = doc.items.len(),
        pages = layout.page_count(),
        bytes = bytes.len(),
        "generated invoice PDF"
    );
    Ok(bytes)
}

/// Generate an invoice and write it into `dir`, returning the file path.
pub fn save_document(
    doc: &InvoiceDocument<'_>,
    config: &BillingConfig,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, BillingError> {
    let bytes = generate_document(doc, config)?;
    let path = dir.as_ref().join(document_file_name(&doc.identity.number));
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), "saved invoice PDF");
    Ok(path)
}

/// Check out `bill` and generate its PDF.
pub fn generate_bill_pdf(bill: &Bill, config: &BillingConfig) -> Result<Vec<u8>, BillingError> {
    bill.checkout()?;
    generate_document(&InvoiceDocument::from_bill(bill, config), config)
}

/// Check out `bill` and save its PDF into `dir`.
pub fn save_bill_pdf(
    bill: &Bill,
    config: &BillingConfig,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, BillingError> {
    bill.checkout()?;
    save_document(&InvoiceDocument::from_bill(bill, config), config, dir)
}

/// `Invoice_<number>.pdf`, with characters unsafe in file names replaced.
pub fn document_file_name(invoice_number: &str) -> String {
    format!("Invoice_{}.pdf", sanitize_filename(invoice_number))
}

fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "invoice".to_string()
    } else {
        trimmed.to_string()
    }
}
