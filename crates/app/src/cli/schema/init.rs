use clap::Args;
use product_manager_app::database::{self, DatabaseSettings};

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    #[command(flatten)]
    database: DatabaseSettings,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let result = database::init_schema(&pool)
        .await
        .map_err(|error| format!("{error}: {}", error.0));

    pool.close().await;

    result?;

    println!("products table ready in `{}`", args.database.name);

    Ok(())
}
