use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use cmdic::core::config::{self, CliOverrides};
use cmdic::dict::HttpFetcher;
use cmdic::launcher::{self, Launch, USAGE};

#[derive(Parser)]
#[command(name = "cmdic", about = "English-Korean dictionary in the terminal")]
struct Args {
    /// Word to look up
    keyword: Option<String>,

    /// Term to emphasize in example sentences (defaults to the keyword)
    #[arg(long)]
    highlight: Option<String>,

    /// Disable emphasis in example sentences
    #[arg(long)]
    no_highlight: bool,

    /// Example sentence page to fetch
    #[arg(long)]
    page: Option<u32>,

    /// Fetch example sentences from this URL instead
    #[arg(long)]
    example_url: Option<String>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        highlight: args.highlight,
        no_highlight: args.no_highlight,
        page: args.page,
        example_url: args.example_url,
        log_file: args.log_file,
    };

    if let Some(path) = config::log_file(&cli) {
        launcher::init_logging(&path);
    }

    let keyword = args.keyword;
    let file_config = config::load_config_or_default();
    let resolved = config::resolve(&file_config, &cli, keyword.as_deref().unwrap_or_default());

    let fetcher = match HttpFetcher::new(resolved.request_timeout) {
        Ok(fetcher) => Arc::new(fetcher),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let launch = launcher::launch(keyword.as_deref(), &resolved, fetcher.as_ref()).await;
    let exit_code = launch.exit_code();
    let (session, session_config) = match launch {
        Launch::Usage => {
            println!("{USAGE}");
            return exit_code;
        }
        Launch::Failed(message) => {
            eprintln!("{message}");
            return exit_code;
        }
        Launch::Done { meaning } => {
            println!("{meaning}");
            return exit_code;
        }
        Launch::Interactive {
            meaning,
            session,
            config,
        } => {
            println!("{meaning}");
            (session, config)
        }
    };

    match cmdic::tui::run(session, session_config, fetcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("Error running program: {e}");
            ExitCode::FAILURE
        }
    }
}
