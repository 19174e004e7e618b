use clap::Parser;

use driftfield::{data::logger, modes::Mode, Config};

fn main() -> driftfield::Result<()> {
    let config = Config::parse();

    logger::init(config.quiet);

    Mode::from_config(&config).run(config)
}
