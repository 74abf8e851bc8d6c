use clap::Parser;
use streaks::Cli;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = streaks::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
