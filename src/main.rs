use chroma::cli::run_cli;
use chroma::utils::colors::Colors;

#[tokio::main]
async fn main() {
    if let Err(e) = run_cli().await {
        eprintln!("{} {:#}", Colors::error("[ERROR]"), e);
        std::process::exit(1);
    }
}
