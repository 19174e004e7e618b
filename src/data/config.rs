use clap::Parser;

use crate::{
    error::ConfigError,
    field::FieldParams,
    graphics::{blend::Argb, color::parse_hex_rgb},
};

pub const DEFAULT_SIZE: (u16, u16) = (800, 600);
pub const DEFAULT_BACKGROUND: Argb = 0xFF_0F_17_2A;
pub const MAX_WIDTH: u16 = 7680;
pub const MAX_HEIGHT: u16 = 4320;

/// Drifting particle field background.
#[derive(Debug, Clone, Parser)]
#[command(name = "driftfield", version, about)]
pub struct Config {
    /// Number of particles
    #[arg(long, default_value_t = 80)]
    pub particles: usize,

    /// Initial window size
    #[arg(long, value_name = "WxH", default_value = "800x600", value_parser = parse_size)]
    pub size: (u16, u16),

    /// Fixed frame rate instead of following the monitor
    #[arg(long, value_name = "HZ")]
    pub fps: Option<f32>,

    /// Seed for a reproducible field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Page background as hex RRGGBB
    #[arg(long, value_name = "RRGGBB", default_value = "0f172a", value_parser = parse_background)]
    pub background: Argb,

    /// Show the field at full layer opacity immediately
    #[arg(long)]
    pub no_fade: bool,

    /// Render in the terminal instead of a window
    #[arg(long)]
    pub terminal: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particles: FieldParams::default().count,
            size: DEFAULT_SIZE,
            fps: None,
            seed: None,
            background: DEFAULT_BACKGROUND,
            no_fade: false,
            terminal: false,
            quiet: false,
        }
    }
}

impl Config {
    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            count: self.particles,
            ..FieldParams::default()
        }
    }

    /// Frame rate in millihertz, when fixed on the command line.
    pub fn milli_hz(&self) -> Option<u32> {
        self.fps
            .filter(|hz| hz.is_finite() && *hz > 0.0)
            .map(|hz| (hz * 1000.0) as u32)
    }
}

pub fn parse_size(s: &str) -> Result<(u16, u16), ConfigError> {
    let invalid = || ConfigError::InvalidSize(s.to_string());

    let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse::<u16>().map_err(|_| invalid())?;
    let h = h.trim().parse::<u16>().map_err(|_| invalid())?;

    if w == 0 || h == 0 {
        return Err(invalid());
    }

    Ok((w.min(MAX_WIDTH), h.min(MAX_HEIGHT)))
}

pub fn parse_background(s: &str) -> Result<Argb, ConfigError> {
    parse_hex_rgb(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(parse_size("800x600").unwrap(), (800, 600));
        assert_eq!(parse_size("1920X1080").unwrap(), (1920, 1080));
        assert_eq!(parse_size("99999x10").ok(), None);
        assert_eq!(parse_size("20000x10").unwrap(), (MAX_WIDTH, 10));
        assert!(matches!(parse_size("0x10"), Err(ConfigError::InvalidSize(_))));
        assert!(parse_size("800").is_err());
        assert!(parse_size("ax600").is_err());
    }

    #[test]
    fn backgrounds() {
        assert_eq!(parse_background("#000000").unwrap(), 0xFF_00_00_00);
        assert!(matches!(parse_background("black"), Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn defaults_match_command_line() {
        let parsed = Config::try_parse_from(["driftfield"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.particles, default.particles);
        assert_eq!(parsed.size, default.size);
        assert_eq!(parsed.background, default.background);
        assert_eq!(parsed.milli_hz(), None);
        assert!(!parsed.terminal);
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "driftfield",
            "--particles",
            "12",
            "--size",
            "320x200",
            "--fps",
            "59.5",
            "--seed",
            "9",
            "--no-fade",
        ])
        .unwrap();

        assert_eq!(config.field_params().count, 12);
        assert_eq!(config.size, (320, 200));
        assert_eq!(config.milli_hz(), Some(59_500));
        assert_eq!(config.seed, Some(9));
        assert!(config.no_fade);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_parse_from(["driftfield", "--size", "big"]).is_err());
        assert!(Config::try_parse_from(["driftfield", "--background", "red"]).is_err());
    }
}
