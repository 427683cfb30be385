pub mod generate;
pub mod ui;

use actix_web::{middleware, web, App, HttpServer};

use crate::config::Config;
use crate::pollinations::UrlBuilder;

#[derive(Clone)]
pub struct AppState {
    pub urls: UrlBuilder,
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let state = AppState {
        urls: UrlBuilder::from_config(&config.upstream),
    };
    let (host, port) = config.server.bind_addr();

    log::info!("Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .service(ui::index)
            .service(generate::generate)
    })
    .bind((host, port))?
    .run()
    .await
}
