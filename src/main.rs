use clap::Parser;
use valuador::core::valuation;
use valuador::utils::logger;
use valuador::{
    CliConfig, Command, LocalStorage, PropertyRecord, PropertyRecordStore, RawPropertyInput,
    ValuationResult,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting valuador CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(config.data_dir.clone());
    let store = PropertyRecordStore::new(storage);

    match config.command {
        Command::Value {
            name,
            m2,
            property_type,
            condition,
            comp1,
            comp2,
            comp3,
        } => {
            let raw = RawPropertyInput {
                name,
                m2,
                property_type,
                condition,
                comp1,
                comp2,
                comp3,
            };
            let record = PropertyRecord::from_raw(&raw);

            // A failed save is reported but never blocks the computation.
            match store.save(&record) {
                Ok(()) => println!("Guardado ✓"),
                Err(e) => {
                    tracing::error!("save failed: {}", e);
                    eprintln!("❌ {}", e.user_message());
                }
            }

            match valuation::compute(&record) {
                Ok(result) => render_results(&record, &result),
                Err(e) => {
                    eprintln!("❌ {}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        Command::Show => match store.load() {
            Some(record) => {
                println!("Nombre: {}", record.name);
                println!("Metros cuadrados: {}", record.area_m2);
                println!("Tipo: {}", record.property_type.as_keyword());
                println!("Estado: {}", record.condition.as_keyword());
                for (i, comp) in record.comparables.iter().enumerate() {
                    println!("Comparable {}: {}", i + 1, valuation::format_money(*comp));
                }
                if let Ok(result) = valuation::compute(&record) {
                    println!();
                    render_results(&record, &result);
                }
            }
            None => println!("No hay datos guardados."),
        },
        Command::Clear => {
            store.clear()?;
            println!("Datos eliminados.");
        }
    }

    Ok(())
}

fn render_results(record: &PropertyRecord, result: &ValuationResult) {
    println!("{}", valuation::summary_text(record, result));
    println!(
        "Promedio de comparables: {}",
        valuation::format_money(result.average_comparable)
    );
    println!(
        "Precio sugerido: {}",
        valuation::format_money(result.suggested_price)
    );
    println!("Rango bajo: {}", valuation::format_money(result.range_low));
    println!("Rango alto: {}", valuation::format_money(result.range_high));
    println!("{}", valuation::advisory_text(record, result));
}
