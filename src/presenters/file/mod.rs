pub mod frame_sequence;
pub mod png;
pub mod ppm;
pub mod svg;

use crate::controllers::export::ExportFormat;
use crate::controllers::ports::file_presenter::FilePresenterPort;

/// The file presenter that writes `format`.
#[must_use]
pub fn file_presenter_for(format: ExportFormat) -> Box<dyn FilePresenterPort + Send + Sync> {
    match format {
        ExportFormat::Png => Box::new(png::PngFilePresenter::new()),
        ExportFormat::Ppm => Box::new(ppm::PpmFilePresenter::new()),
        ExportFormat::Svg => Box::new(svg::SvgFilePresenter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presenter_matches_requested_format() {
        for &format in ExportFormat::ALL {
            assert_eq!(file_presenter_for(format).format(), format);
        }
    }
}
