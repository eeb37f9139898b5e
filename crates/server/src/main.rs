#[tokio::main]
async fn main() -> anyhow::Result<()> {
    anycopy_server::start().await
}
