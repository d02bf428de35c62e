use actix_files::Files;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use beemap::dataset::Dataset;
use beemap::www;
use clap::Parser;
use std::env;

/// Serves the bee-colony impact dashboard.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the colony impact CSV
    #[arg(long, default_value = "data/bee_colony_impact.csv")]
    data: std::path::PathBuf,
    /// Directory of static assets served under /static
    #[arg(long, default_value = "static")]
    assets: std::path::PathBuf,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load failure is fatal; there is no partial or recovered load.
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("Failed to load colony data from {}", cli.data.display()))?;
    eprintln!(
        "Loaded {} aggregated records from {}",
        dataset.records().len(),
        cli.data.display()
    );
    let dataset = web::Data::new(dataset);

    let server_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| String::from("0.0.0.0"));
    let server_port = env::var("PORT").unwrap_or_else(|_| String::from("8080"));
    let bind_address = format!("{}:{}", server_address, server_port);

    eprintln!("Starting server at: http://{}/", bind_address);
    HttpServer::new(move || {
        App::new()
            .app_data(dataset.clone())
            .route("/", web::get().to(www::handlers::index))
            .route(
                "/api/update",
                web::get().to(www::handlers::update::show),
            )
            .service(Files::new("/static", cli.assets.clone()))
    })
    .bind(bind_address)?
    .run()
    .await?;
    Ok(())
}
