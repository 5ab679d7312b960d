use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod server;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        config.dist_dir.display(),
        config.assets_dir.display(),
        config.host,
        config.port
    );

    let addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        let config = config.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| server::routes(&config, cfg))
    })
    .bind(addr.clone())
    .with_context(|| format!("binding {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("http server")
}
