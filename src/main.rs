use routefix::cli::{handle_fix, CliArgs};
use routefix::util::{init_logging, LoggingConfig};
use routefix::{RoutefixConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let config = args.apply_to(RoutefixConfig::default());

    init_logging(LoggingConfig::from(&config));

    debug!("routefix v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_fix(&args, config);
    std::process::exit(exit_code);
}
