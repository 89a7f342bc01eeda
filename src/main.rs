use labelflow_rust::{aws, run, AppConfig};
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Cargar .env si existe antes de leer cualquier variable
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[labelflow] configuración: {e}");
            std::process::exit(2);
        }
    };

    let pipeline = aws::build_pipeline(&config.aws).await;
    match run(&config, &pipeline).await {
        Ok(summary) => {
            info!("{} imágenes registradas en {} (branch {})", summary.records.len(), summary.table, summary.branch);
        }
        Err(e) => {
            eprintln!("[labelflow] {e}");
            std::process::exit(e.exit_code());
        }
    }
}
