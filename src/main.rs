/*
Description : Reads a compose request, renders the WhatsApp-ready school message and prints it
              together with an optional share link.
*/
use clap::Parser;
use dotenv::dotenv;

use school_message_composer::common::*;

use school_message_composer::controller::main_controller::*;
use school_message_composer::env_configuration::env_config::*;
use school_message_composer::model::{cli_args::*, configs::{config::*, style_config::*}};
use school_message_composer::service::compose_service_impl::*;
use school_message_composer::utils_modules::logger_utils::*;

fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    let cli: Cli = Cli::parse();

    /* runs before the logger exists, so failures go to stderr */
    let config: Config = match initialize_server_config(SYSTEM_CONFIG_PATH.as_str()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[main()] Unable to load system config: {:?}", e);
            std::process::exit(1);
        }
    };

    /* 전역 로거설정 */
    let log_level: String = cli.log_level.clone().unwrap_or_else(|| LOG_LEVEL.to_string());
    let _logger_handle: LoggerHandle = match set_global_logger(&config.log, &log_level) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("[main()] Unable to initialize logger: {:?}", e);
            std::process::exit(1);
        }
    };

    info!("Start School Message Composer");

    if Path::new(SYSTEM_CONFIG_PATH.as_str()).exists() {
        info!("Using system config '{}'", SYSTEM_CONFIG_PATH.as_str());
    } else {
        warn!(
            "System config '{}' not found. Falling back to default style settings.",
            SYSTEM_CONFIG_PATH.as_str()
        );
    }

    let style_config: Arc<StyleConfig> = Arc::clone(&config.style);
    let compose_service: Arc<ComposeServiceImpl> =
        Arc::new(ComposeServiceImpl::new(Arc::clone(&style_config)));
    let controller: MainController<ComposeServiceImpl> =
        MainController::new(compose_service, style_config);

    match controller.run(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("[main()] {:?}", e);
            std::process::exit(1);
        }
    }
}
