#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prateleira_lib::run().await
}
