use first_mcp::infra;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();
    infra::boot::run().await
}
