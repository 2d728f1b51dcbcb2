use manazza::init::{initialize_app, prepare_layout};
use manazza::server::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = initialize_app(None);
    let layout = prepare_layout(&config);
    log::info!("serving pages from {}", config.pages_dir.display());
    run_server(config, layout).await
}
