use std::error::Error;
use std::io;
use library_inventory::catalog::controller::ConsoleController;
use library_inventory::catalog::factory::create_catalog_service;
use library_inventory::core::domain::Configuration;
use library_inventory::utils::logs::setup_tracing;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Configuration::default();
    setup_tracing(config.tracing_level());

    let mut catalog_service = create_catalog_service(&config)?;
    let stdin = io::stdin();
    let mut console = ConsoleController::new(stdin.lock(), io::stdout());
    console.run(catalog_service.as_mut())?;
    Ok(())
}
