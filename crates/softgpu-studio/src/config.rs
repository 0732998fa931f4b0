use std::path::PathBuf;

use clap::Parser;
use softgpu_engine::logging::LoggingConfig;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_FRAMES: u32 = 1;
pub const DEFAULT_OUTPUT: &str = "softgpu.png";
pub const DEFAULT_STACKS: u32 = 32;
pub const DEFAULT_SLICES: u32 = 64;

/// Renders a Phong-lit sphere on the software device and reports frame time.
#[derive(Parser, Debug)]
#[command(name = "softgpu-studio", version)]
pub struct Args {
    /// Framebuffer width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Framebuffer height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Frames rendered for the timing measurement.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u32,

    /// Output PNG path for the last frame.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Log filter in `env_logger` syntax; falls back to RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,

    /// Sphere latitude bands.
    #[arg(long, default_value_t = DEFAULT_STACKS)]
    pub stacks: u32,

    /// Sphere longitude segments.
    #[arg(long, default_value_t = DEFAULT_SLICES)]
    pub slices: u32,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub output: PathBuf,
    pub log_filter: Option<String>,
    pub stacks: u32,
    pub slices: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: DEFAULT_FRAMES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_filter: None,
            stacks: DEFAULT_STACKS,
            slices: DEFAULT_SLICES,
        }
    }
}

impl StudioConfig {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            ..LoggingConfig::default()
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl TryFrom<Args> for StudioConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> anyhow::Result<Self> {
        anyhow::ensure!(
            args.width > 0 && args.height > 0,
            "framebuffer must not be empty (got {}x{})",
            args.width,
            args.height
        );
        anyhow::ensure!(args.frames > 0, "--frames must be at least 1");
        anyhow::ensure!(
            args.stacks >= 2 && args.slices >= 3,
            "sphere needs at least 2 stacks and 3 slices (got {} and {})",
            args.stacks,
            args.slices
        );

        Ok(Self {
            width: args.width,
            height: args.height,
            frames: args.frames,
            output: args.out,
            log_filter: args.log,
            stacks: args.stacks,
            slices: args.slices,
        })
    }
}
