use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    HttpResponse,
};

use crate::{
    error::SyncerError,
    formatter::{csv_writer::records_to_csv, TradeCsvRecord},
};

pub const TEXT_CSV: &str = "text/csv";

/// 200 with the records as a downloadable CSV file.
pub fn csv_attachment(records: &[TradeCsvRecord], filename: String) -> Result<HttpResponse, SyncerError> {
    let body = records_to_csv(records)?;

    Ok(HttpResponse::Ok()
        .content_type(TEXT_CSV)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(body))
}
