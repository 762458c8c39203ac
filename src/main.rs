use anyhow::Result;

fn main() -> Result<()> {
    conversation_cost::cli::run()
}
