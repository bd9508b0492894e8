#[tokio::main]
async fn main() {
    if let Err(error) = folio_tui::run_cli().await {
        eprintln!("folio: {error:#}");
        std::process::exit(1);
    }
}
