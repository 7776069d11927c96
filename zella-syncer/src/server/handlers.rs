use actix_web::{
    get,
    web::{Data, Path},
    HttpRequest, HttpResponse, Responder,
};
use chrono::Utc;
use tracing::error;

use super::{openapi::openapi_document, response::csv_attachment};
use crate::{error::SyncerError, service::TradeService};

/*----- */
// Trade Handlers
/*----- */
#[get("/latest")]
pub async fn get_latest_trades_handler(
    service: Data<TradeService>,
) -> Result<HttpResponse, SyncerError> {
    let records = service.get_latest_trades().await?;

    let filename = format!("latest-trades-{}.csv", Utc::now().format("%Y-%m-%d"));
    csv_attachment(&records, filename).inspect_err(|error| error!(%error, "error rendering latest trades"))
}

#[get("/date/{date}")]
pub async fn get_trades_by_date_handler(
    service: Data<TradeService>,
    date: Path<String>,
) -> Result<HttpResponse, SyncerError> {
    let date = date.into_inner();
    // Rejected dates are logged by the service
    let records = service.get_trades_by_date(&date).await?;

    csv_attachment(&records, format!("trades-{date}.csv"))
        .inspect_err(|error| error!(%date, %error, "error rendering trades by date"))
}

/*----- */
// Misc Handlers
/*----- */
#[get("/health")]
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api-docs-json")]
pub async fn api_docs_handler(request: HttpRequest) -> impl Responder {
    let connection = request.connection_info();
    let server_url = format!("{}://{}", connection.scheme(), connection.host());

    HttpResponse::Ok().json(openapi_document(&server_url))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not Found" }))
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use std::sync::Arc;

    use actix_web::{
        http::{header, StatusCode},
        test, web, App,
    };

    use super::*;
    use crate::{
        checkpoint::in_memory::InMemoryCheckpointStore,
        fetcher::TradeFetcher,
        server::configure,
        test_utils::{trade, MockVenue},
    };

    fn trade_service(venue: MockVenue, symbols: &[&str]) -> Data<TradeService> {
        let fetcher = TradeFetcher::new(
            Arc::new(venue),
            symbols.iter().map(|symbol| symbol.to_string()).collect(),
        );
        Data::new(TradeService::new(fetcher, Arc::new(InMemoryCheckpointStore::new())))
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service)
                    .configure(configure)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(trade_service(MockVenue::new(), &[]));

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_latest_trades_csv_attachment() {
        let venue = MockVenue::new().with_trades("BTCUSDT", vec![trade("BTCUSDT", 1700000000000)]);
        let app = app!(trade_service(venue, &["BTCUSDT"]));

        let request = test::TestRequest::get().uri("/api/trades/latest").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/csv"));

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        let expected = format!(
            "attachment; filename=\"latest-trades-{}.csv\"",
            Utc::now().format("%Y-%m-%d")
        );
        assert_eq!(disposition, expected);

        let body = test::read_body(response).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.starts_with("Date,Time,Symbol,Buy/Sell,"));
        assert!(body.contains("11/14/23,17:13:20,BTCUSDT,BUY,"));
    }

    #[actix_web::test]
    async fn test_latest_trades_empty_body_when_nothing_new() {
        let app = app!(trade_service(MockVenue::new(), &["BTCUSDT"]));

        let request = test::TestRequest::get().uri("/api/trades/latest").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(test::read_body(response).await.is_empty());
    }

    #[actix_web::test]
    async fn test_latest_trades_survive_single_symbol_failure() {
        let venue = MockVenue::new()
            .with_failure("BTCUSDT", "venue unavailable")
            .with_trades("ETHUSDT", vec![trade("ETHUSDT", 1700000000000)]);
        let app = app!(trade_service(venue, &["BTCUSDT", "ETHUSDT"]));

        let request = test::TestRequest::get().uri("/api/trades/latest").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("ETHUSDT"));
        assert!(!body.contains("BTCUSDT"));
    }

    #[actix_web::test]
    async fn test_trades_by_date_attachment_name() {
        let venue = MockVenue::new().with_trades("BTCUSDT", vec![trade("BTCUSDT", 1700000000000)]);
        let app = app!(trade_service(venue, &["BTCUSDT"]));

        let request = test::TestRequest::get().uri("/api/trades/date/20231114").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"trades-20231114.csv\""
        );
    }

    #[actix_web::test]
    async fn test_trades_by_date_invalid_format() {
        let app = app!(trade_service(MockVenue::new(), &["BTCUSDT"]));

        let request = test::TestRequest::get().uri("/api/trades/date/2025-1-1").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Invalid date format. Please use YYYYMMDD format."
            })
        );
    }

    #[actix_web::test]
    async fn test_api_docs() {
        let app = app!(trade_service(MockVenue::new(), &[]));

        let request = test::TestRequest::get().uri("/api-docs-json").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["openapi"], "3.0.0");
        assert!(body["paths"]["/api/trades/latest"].is_object());
    }

    #[actix_web::test]
    async fn test_unknown_route_not_found() {
        let app = app!(trade_service(MockVenue::new(), &[]));

        let request = test::TestRequest::get().uri("/unknown").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Not Found" }));
    }
}
