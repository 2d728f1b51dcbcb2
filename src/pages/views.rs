use actix_web::{route, web, HttpResponse};

use manazza_config::Config;

use crate::errors::HttpError;
use crate::state::AppState;

use super::fragments::{read_page_fragment, INDEX_PAGE};

async fn render_page(
    config: &Config,
    app_state: &AppState,
    page_name: &str,
) -> Result<String, HttpError> {
    if let Some(page) = app_state.page_cache.lock().await.get(page_name) {
        return Ok(page.to_string());
    };
    let fragment = read_page_fragment(&config.pages_dir, page_name)?;
    let page = app_state.layout.render(&fragment)?;
    log::debug!("page rendered: {page_name}");
    app_state.page_cache.lock().await
        .set(page_name.to_string(), page.clone());
    Ok(page)
}

fn html_response(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

#[route("/", method = "GET", method = "HEAD")]
pub async fn index_page_view(
    config: web::Data<Config>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let page = render_page(&config, &app_state, INDEX_PAGE).await?;
    Ok(html_response(page))
}

#[route("/{page_name}", method = "GET", method = "HEAD")]
pub async fn page_view(
    config: web::Data<Config>,
    app_state: web::Data<AppState>,
    page_name: web::Path<String>,
) -> Result<HttpResponse, HttpError> {
    let page = render_page(&config, &app_state, &page_name).await?;
    Ok(html_response(page))
}
