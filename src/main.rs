#[tokio::main]
async fn main() -> std::io::Result<()> {
    form_bridge::run_with_config().await
}
