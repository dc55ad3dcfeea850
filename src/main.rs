use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use neovia_tracker::api::api::api_service;
use neovia_tracker::api::structs::api_service_data::ApiServiceData;
use neovia_tracker::common::common::setup_logging;
use neovia_tracker::config::structs::configuration::Configuration;
use neovia_tracker::structs::Cli;
use neovia_tracker::tracker::structs::download_tracker::DownloadTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(DownloadTracker::new(config.clone(), args.create_database).await);

            if config.database.persistent {
                tracker.load_stats().await;
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let mut api_handles = Vec::new();
            let mut api_futures = Vec::new();
            for api_server_config in &config.api_server {
                if !api_server_config.enabled { continue; }
                let address: SocketAddr = match api_server_config.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[BOOT] Invalid bind_address '{}': {}", api_server_config.bind_address, e);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    tracker: tracker.clone(),
                    api_server_config: Arc::new(api_server_config.clone()),
                });
                let (handle, server) = api_service(
                    address,
                    data,
                    api_server_config.keep_alive,
                    api_server_config.request_timeout,
                    api_server_config.disconnect_timeout,
                    api_server_config.threads,
                ).await;
                api_handles.push(handle);
                api_futures.push(tokio::spawn(server));
            }

            if api_handles.is_empty() {
                error!("[BOOT] No enabled API server in the configuration, exiting...");
                exit(1);
            }

            tokio_shutdown.handle().await;

            info!("[SHUTDOWN] Stopping API services...");
            for handle in api_handles {
                handle.stop(true).await;
            }
            let _ = try_join_all(api_futures).await;
            info!("[SHUTDOWN] Done, bye!");

            Ok(())
        })
}
