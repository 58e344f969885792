mod error;
mod fetch;
mod relay;
mod state;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpServer};
use awc::Client;
use clap::Parser;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    #[clap(default_value = "9080")]
    port: u16,

    #[arg(short, long)]
    #[clap(default_value = "1")]
    workers: usize,

    /// Upstream fetch timeout in seconds
    #[arg(short, long)]
    #[clap(default_value = "60")]
    timeout: u64,
}

#[get("/status")]
async fn status() -> &'static str {
    "Ok"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Args = Args::parse();

    let app_state = AppState::new(args.timeout);

    log::info!(
        "starting imgrelay server at http://localhost:{port}",
        port = args.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Client::default()))
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .service(status)
            .service(relay::fetch_image)
    })
    .workers(args.workers)
    .bind(("0.0.0.0", args.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    #[actix_web::test]
    async fn status_ok() {
        let app = test::init_service(App::new().service(super::status)).await;

        let req = test::TestRequest::get().uri("/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Ok");
    }
}
