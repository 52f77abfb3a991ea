//! `helpdesk tools` — List the support tools offered to the model.

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let registry = helpdesk_tools::default_registry();

    println!("Support tools ({})", registry.len());
    println!("==================");
    for def in registry.definitions() {
        println!();
        println!("  {}", def.name);
        println!("    {}", def.description);
        let schema = serde_json::to_string_pretty(&def.parameters)?;
        for line in schema.lines() {
            println!("    {line}");
        }
    }

    Ok(())
}
