use clap::Parser;
use std::error::Error;
use vmanage_public_ips::cli::Args;
use vmanage_public_ips::{logging, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    logging::init(&args.log_file)?;
    log::info!("#Start main()");

    if let Err(e) = run(args).await {
        log::error!("Run aborted: {e}");
        std::process::exit(1);
    }

    log::info!("#End main()");
    Ok(())
}
