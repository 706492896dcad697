use clap::Parser;

use datafetch::cli::Cli;
use datafetch::config::Config;
use datafetch::errors::FetcherResult;
use datafetch::logging;
use datafetch::services::DownloadService;
use datafetch::sources::FigshareSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FetcherResult<()> {
    // .env values must be in the environment before clap reads `env` defaults
    Config::load_dotenv();
    let cli = Cli::parse();

    logging::init_logging();

    let config = Config::from_overrides(
        cli.base_url,
        cli.article_ids,
        cli.output_dir,
        cli.timeout_secs,
    )?;
    tracing::debug!(?config, "configuration loaded");

    let source = FigshareSource::new(&config.base_url, config.timeout)?;
    let service = DownloadService::new(source, &config);

    if cli.dry_run {
        cmd_plan(&service)
    } else {
        cmd_download(&service)
    }
}

fn cmd_download(service: &DownloadService<FigshareSource>) -> FetcherResult<()> {
    println!("Starting to download the files. Please wait...");

    service.download_all()?;

    println!("\nAll files have been downloaded");
    println!("\nNow you are ready to test the models!");

    Ok(())
}

fn cmd_plan(service: &DownloadService<FigshareSource>) -> FetcherResult<()> {
    println!("Listing the files. Nothing will be downloaded.\n");

    let plan = service.plan_all()?;
    let mut total = 0;

    for (id, files) in &plan {
        if files.is_empty() {
            println!("No file found for article ID {}", id);
            continue;
        }

        println!("Article {} ({} files):", id, files.len());
        for file in files {
            println!("  [DRY RUN] {} -> {}", file.remote_name, file.destination.display());
        }
        total += files.len();
        println!();
    }

    println!(
        "Dry run complete. Would download {} files into {}",
        total,
        service.output().path().display()
    );

    Ok(())
}
