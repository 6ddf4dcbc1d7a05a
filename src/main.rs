// Start of file: src/main.rs

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hello_backend::core::server::run().await
}

// End of file: src/main.rs
