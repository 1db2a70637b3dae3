pub mod cli;

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "valuador")]
#[command(about = "Valuador inmobiliario: precio sugerido a partir de comparables")]
pub struct CliConfig {
    /// Directory holding the saved form
    #[arg(long, default_value = ".valuador")]
    pub data_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Save the form and compute the suggested price
    Value {
        #[arg(long, default_value = "")]
        name: String,

        /// Area in square meters
        #[arg(long, default_value = "")]
        m2: String,

        /// departamento | casa | terreno
        #[arg(long = "type", default_value = "")]
        property_type: String,

        /// bajo | medio | alto
        #[arg(long = "state", default_value = "")]
        condition: String,

        #[arg(long, default_value = "")]
        comp1: String,

        #[arg(long, default_value = "")]
        comp2: String,

        #[arg(long, default_value = "")]
        comp3: String,
    },

    /// Show the last saved form and its valuation
    Show,

    /// Remove the saved form
    Clear,
}
