#[tokio::main]
async fn main() {
    if let Err(e) = clinic_lib::run().await {
        tracing::error!("{e}");
        eprintln!("clinic: {e}");
        std::process::exit(1);
    }
}
