use std::process::ExitCode;

use docserve::activity;
use docserve::cli::{USAGE, parse_args};
use docserve::config::Config;
use docserve::server;

#[tokio::main]
async fn main() -> ExitCode {
    let Ok(args) = parse_args(std::env::args_os()) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let cfg = match Config::load(args).and_then(|cfg| cfg.validate().map(|_| cfg)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{:#}", e);
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = activity::init(cfg.log_path.as_deref()) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    tokio::select! {
        res = server::serve(&cfg) => {
            if let Err(e) = res {
                tracing::error!("{:#}", e);
                return ExitCode::FAILURE;
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    ExitCode::SUCCESS
}
