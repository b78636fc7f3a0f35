use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest},
    http::StatusCode,
    web, App, Error, HttpRequest, HttpResponse, HttpServer,
};
use common::utils::input_handler::QueryParams;
use reqwest::Client;

use super::{
    config::Config,
    handler::{invoke, ProxyResponse},
};

/// Shared by every request, never mutated
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

pub fn services<T: ServiceFactory<ServiceRequest, Config = (), Error = Error, InitError = ()>>(
    app: App<T>,
) -> App<T> {
    app.route("/", web::get().to(chargable_cars))
        .route("/chargable-cars", web::get().to(chargable_cars))
}

/// Serves the handler until the process is stopped
pub async fn serve(config: Config, client: Client) -> std::io::Result<()> {
    let addr = (config.host.clone(), config.port);
    let config = Arc::new(config);

    log::info!("My addr is {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        services(App::new().app_data(web::Data::new(AppState {
            config: config.clone(),
            client: client.clone(),
        })))
    })
    .bind(addr)?
    .run()
    .await
}

async fn chargable_cars(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let params = query_params(req.query_string());
    let response = invoke(params, state.config.clone(), state.client.clone()).await;

    to_http_response(response)
}

/// `None` when the request carries no query string at all
pub fn query_params(query_string: &str) -> Option<QueryParams> {
    if query_string.is_empty() {
        return None;
    }

    Some(
        web::Query::<QueryParams>::from_query(query_string)
            .map(|q| q.into_inner())
            .unwrap_or_default(),
    )
}

pub fn to_http_response(response: ProxyResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    if response.is_base64_encoded {
        builder.insert_header(("Content-Transfer-Encoding", "base64"));
    }

    builder.body(response.body)
}
