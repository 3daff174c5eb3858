#[tokio::main]
async fn main() {
    if let Err(err) = app::bootstrap::run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
