use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::Config;

/// Static assets, the SPA bundle, and `index.html` for every client-side route.
pub fn routes(config: &Config, cfg: &mut web::ServiceConfig) {
    let index = config.index_file();

    cfg.service(Files::new("/assets", &config.assets_dir))
        .service(
            Files::new("/", &config.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        log::debug!("spa fallback for {}", req.path());
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}
