use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::controllers::export::ExportFormat;
use crate::core::fractals::fractal_kinds::FractalMode;
use crate::core::params::param_change::ParamChange;

/// Cantor Explorer - render and animate the Cantor set and Cantor dust
#[derive(Debug, Parser)]
#[command(name = "cantor-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the scene at the configured depth and export it
    Render {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "png")]
        format: FormatArg,

        /// Output file (defaults to cantor.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output width in pixels (defaults to the scene width)
        #[arg(short, long)]
        width: Option<u32>,
    },

    /// Run the level animation and export every frame
    Animate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "png")]
        format: FormatArg,

        /// Directory the frames are written to
        #[arg(long, default_value = "frames")]
        out_dir: PathBuf,

        /// Output width in pixels (defaults to the scene width)
        #[arg(short, long)]
        width: Option<u32>,

        /// Stop after this many frames (required with --loop)
        #[arg(long)]
        max_frames: Option<usize>,
    },

    /// Print or save the resolved parameters as JSON
    Params {
        #[command(flatten)]
        params: ParamArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Flags shared by every command. Applied on top of `--params`, in order.
#[derive(Debug, Default, Args)]
pub struct ParamArgs {
    /// Load parameters from a JSON file first
    #[arg(long = "params", value_name = "FILE")]
    pub params_file: Option<PathBuf>,

    /// Which construction to draw
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Recursion depth
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i32>,

    /// Stroke width (line) or square side (dust)
    #[arg(short, long, allow_negative_numbers = true)]
    pub thickness: Option<f64>,

    /// Foreground colour, #rrggbb or #rgb
    #[arg(long)]
    pub fg: Option<String>,

    /// Background colour, #rrggbb or #rgb
    #[arg(long)]
    pub bg: Option<String>,

    /// Line mode: stack every level from 0 to depth
    #[arg(long)]
    pub show_all_levels: bool,

    /// Gap between stacked levels
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Restart the animation from level 0 after the last level
    #[arg(long = "loop")]
    pub loop_animation: bool,

    /// Milliseconds between animation frames
    #[arg(long)]
    pub speed_ms: Option<u32>,
}

impl ParamArgs {
    /// The flags that were given, as changes in a fixed order.
    #[must_use]
    pub fn changes(&self) -> Vec<ParamChange> {
        let mut changes = Vec::new();

        if let Some(mode) = self.mode {
            changes.push(ParamChange::Mode(mode.into()));
        }
        if let Some(depth) = self.depth {
            changes.push(ParamChange::Depth(depth));
        }
        if let Some(thickness) = self.thickness {
            changes.push(ParamChange::Thickness(thickness));
        }
        if let Some(fg) = &self.fg {
            changes.push(ParamChange::Foreground(fg.clone()));
        }
        if let Some(bg) = &self.bg {
            changes.push(ParamChange::Background(bg.clone()));
        }
        if self.show_all_levels {
            changes.push(ParamChange::ShowAllLevels(true));
        }
        if let Some(spacing) = self.spacing {
            changes.push(ParamChange::Spacing(spacing));
        }
        if self.loop_animation {
            changes.push(ParamChange::Loop(true));
        }
        if let Some(speed_ms) = self.speed_ms {
            changes.push(ParamChange::SpeedMs(speed_ms));
        }

        changes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// The 1-D Cantor set
    Line,
    /// The 2-D Cantor dust
    Dust,
}

impl From<ModeArg> for FractalMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Line => Self::Line,
            ModeArg::Dust => Self::Dust,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// PNG image
    Png,
    /// Binary PPM image
    Ppm,
    /// SVG vector image
    Svg,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => Self::Png,
            FormatArg::Ppm => Self::Ppm,
            FormatArg::Svg => Self::Svg,
        }
    }
}
