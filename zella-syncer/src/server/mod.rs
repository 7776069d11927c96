pub mod handlers;
pub mod openapi;
pub mod response;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use self::handlers::{
    api_docs_handler, get_latest_trades_handler, get_trades_by_date_handler, health_handler,
    not_found,
};
use crate::{config::SyncerConfig, service::TradeService};

/*----- */
// Routes
/*----- */
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/trades")
            .service(get_latest_trades_handler)
            .service(get_trades_by_date_handler),
    )
    .service(health_handler)
    .service(api_docs_handler);
}

/*----- */
// Http Server
/*----- */
pub async fn run(config: &SyncerConfig, service: TradeService) -> std::io::Result<()> {
    let service = web::Data::new(service);

    info!(host = %config.host, port = config.port, "starting http server");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(configure)
            .default_service(web::to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
