use std::net::SocketAddr;
use std::str::FromStr;

use actix_web::{
    middleware::{
        ErrorHandlers,
        ErrorHandlerResponse,
        Logger as ActixLogger,
        NormalizePath,
    },
    web,
    App,
    HttpResponse,
    HttpServer,
};
use log::Level;

use manazza_config::Config;
use manazza_layout::RootLayout;

use crate::http::{
    create_default_headers_middleware,
    log_response_error,
};
use crate::pages::views as pages;
use crate::state::AppState;

pub const STATIC_FILES_PATH: &str = "/static";

pub async fn run_server(
    config: Config,
    layout: RootLayout,
) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::init(&config, layout));
    let num_workers = std::cmp::max(num_cpus::get(), 4);
    let http_socket_addr = config.http_socket();

    let http_server = HttpServer::new(move || {
        let mut app = App::new()
            // NOTE: middlewares are executed in the reverse order
            // https://docs.rs/actix-web/latest/actix_web/middleware/#ordering
            .wrap(NormalizePath::trim())
            .wrap(ErrorHandlers::new()
                .default_handler_server(|response| {
                   log_response_error(Level::Error, &response);
                   Ok(ErrorHandlerResponse::Response(response.map_into_left_body()))
                })
            )
            .wrap(create_default_headers_middleware(app_state.layout.analytics()))
            .wrap(ActixLogger::new("%r : %s : %{r}a"))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::clone(&app_state))
            .service(
                // Fallback for well-known paths
                web::resource("/.well-known/{path}")
                    .to(HttpResponse::NotFound)
            );
        if let Some(ref static_dir) = config.static_dir {
            app = app.service(actix_files::Files::new(
                STATIC_FILES_PATH,
                static_dir.clone(),
            ));
        };
        app
            .service(pages::index_page_view)
            .service(pages::page_view)
    });

    let http_server = if let Ok(addr) = SocketAddr::from_str(&http_socket_addr) {
        http_server.bind(addr)?
    } else {
        // Assume unix socket path
        http_server.bind_uds(&http_socket_addr)?
    };
    log::info!("listening on {}", http_socket_addr);
    http_server
        .workers(num_workers)
        .run()
        .await?;
    log::info!("server terminated");
    Ok(())
}
