use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = apply_scale_profile::cli::Cli::parse();

    if let Err(err) = apply_scale_profile::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
