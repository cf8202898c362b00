use bikeshare::app::{app_config::AppConfig, BikeshareApp};
use clap::Parser;

fn main() {
    env_logger::init();

    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = BikeshareApp::parse();
    let result =
        AppConfig::load(args.config_file.as_deref()).and_then(|config| args.op.run(&config));
    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
