use clap::{Parser, Subcommand};

mod schema;

#[derive(Debug, Parser)]
#[command(
    name = "product-manager-app",
    about = "Product manager administration CLI",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Schema(schema::SchemaCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Schema(command) => schema::run(command).await,
        }
    }
}
