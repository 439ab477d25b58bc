use clap::{Args, Subcommand};

mod init;

#[derive(Debug, Args)]
pub(crate) struct SchemaCommand {
    #[command(subcommand)]
    command: SchemaSubcommand,
}

#[derive(Debug, Subcommand)]
enum SchemaSubcommand {
    /// Create the products table if it does not exist
    Init(init::InitArgs),
}

pub(crate) async fn run(command: SchemaCommand) -> Result<(), String> {
    match command.command {
        SchemaSubcommand::Init(args) => init::run(args).await,
    }
}
