use axum::{
    body::Bytes,
    extract::Extension,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;

use invoicegen_invoicing::InvoiceData;

use crate::app::errors::ApiError;
use crate::artifact::InvoiceArtifact;
use crate::context::RenderContext;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PDF_DISPOSITION: &str = "attachment; filename=invoice.pdf";

pub fn router() -> Router {
    Router::new().route("/generate-invoice", post(generate_invoice).options(preflight))
}

/// CORS preflight; headers come from the middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Decode the invoice, render it into a temporary file and answer with its bytes.
///
/// The body is decoded whatever its `Content-Type`.
#[tracing::instrument(name = "generate_invoice", skip_all, fields(invoice_number = tracing::field::Empty))]
pub async fn generate_invoice(
    Extension(ctx): Extension<RenderContext>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let invoice: InvoiceData = serde_json::from_slice(&body)?;
    tracing::Span::current().record("invoice_number", invoice.invoice_number);
    let rows = invoice.rows.len();

    let pdf = tokio::task::spawn_blocking(move || render_to_artifact(&ctx, &invoice)).await??;

    tracing::info!(rows, bytes = pdf.len(), "invoice created");

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, PDF_CONTENT_TYPE), (CONTENT_DISPOSITION, PDF_DISPOSITION)],
        pdf,
    )
        .into_response())
}

// Blocking: font embedding, PDF encoding and file IO. The artifact is
// removed when this returns, on success and on error alike.
fn render_to_artifact(ctx: &RenderContext, invoice: &InvoiceData) -> Result<Vec<u8>, ApiError> {
    let artifact = InvoiceArtifact::create(ctx.output_dir())?;
    let today = Local::now().date_naive();
    invoicegen_invoicing::write_pdf(invoice, ctx.fonts(), today, artifact.writer()?)?;
    Ok(artifact.into_bytes()?)
}
