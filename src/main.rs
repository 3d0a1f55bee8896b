fn main() -> anyhow::Result<()> {
    item_store::logging::init();
    item_store::run()?;
    Ok(())
}
