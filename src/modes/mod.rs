#[cfg(feature = "terminal")]
pub mod console_mode;

pub mod ticker;
pub mod windowed_mode;

use crate::{data::config::Config, error::Result};

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Mode {
    Win,
    Terminal,
}

impl Mode {
    pub fn from_config(config: &Config) -> Mode {
        if config.terminal {
            Mode::Terminal
        } else {
            Mode::Win
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Mode::Win => "window",
            Mode::Terminal => "terminal",
        }
    }

    pub fn run(self, config: Config) -> Result<()> {
        log::info!("running in {} mode", self.get_name());

        match self {
            Mode::Win => windowed_mode::winit_main(config),

            #[cfg(feature = "terminal")]
            Mode::Terminal => console_mode::con_main(config),

            #[cfg(not(feature = "terminal"))]
            Mode::Terminal => Err(crate::error::Error::TerminalUnsupported),
        }
    }
}
