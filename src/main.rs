#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hashbang::run_server().await
}
