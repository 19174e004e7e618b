use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("framebuffer error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal rendering is not compiled in, rebuild with --features terminal")]
    TerminalUnsupported,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected command-line values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid size {0:?}, expected WIDTHxHEIGHT with both sides above zero")]
    InvalidSize(String),

    #[error("invalid color {0:?}, expected RRGGBB")]
    InvalidColor(String),
}
