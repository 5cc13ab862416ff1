use tunerelay::{
    config::{self, Config},
    error, server,
};

#[tokio::main]
async fn main() {
    config::load_env();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    server::start_api_server(config).await;
}
