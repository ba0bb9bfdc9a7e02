use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Ppm,
    Svg,
}

impl ExportFormat {
    pub const ALL: &'static [Self] = &[Self::Png, Self::Ppm, Self::Svg];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Ppm => "PPM",
            Self::Svg => "SVG",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ppm => "ppm",
            Self::Svg => "svg",
        }
    }

    /// Output widths accepted for this format, in pixels.
    #[must_use]
    pub const fn width_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Png | Self::Ppm => 64..=10_000,
            Self::Svg => 64..=20_000,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
