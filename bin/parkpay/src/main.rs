#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    parkpay::run().await
}
