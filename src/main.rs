use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    recipe_chat::run().await
}
