use pomidor_core::quotes;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let quote = runtime.block_on(quotes::fetch_quote());
    println!("{quote}");
    Ok(())
}
