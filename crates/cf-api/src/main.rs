#[tokio::main]
async fn main() {
    if let Err(err) = cf_api::run().await {
        tracing::error!(error = %err, "cf-api failed");
        std::process::exit(1);
    }
}
