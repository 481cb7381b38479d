//! Rendering of diagnostic plots
//!
//! Every plot is drawn onto an explicit [`Figure`]. The backend is chosen
//! from the file extension: `.svg` renders vector output, anything else a
//! bitmap (PNG for `.png`).
//!
//! ```no_run
//! use porofit_plot::{Figure, render_density};
//! use porofit_analysis::diagnostics::DensityOverlay;
//! # fn demo(overlay: &DensityOverlay) -> Result<(), porofit_plot::PlotError> {
//! render_density(&Figure::new("plots/density.svg"), overlay, "NEUT")?;
//! # Ok(())
//! # }
//! ```

use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use log::info;
use plotters::{
    coord::Shift,
    prelude::{
        BitMapBackend, DrawingArea, DrawingAreaErrorKind, DrawingBackend, IntoDrawingArea as _,
        SVGBackend,
    },
};
use porofit_analysis::diagnostics::{DensityOverlay, PpPlot, QqPlot};

use self::charts::{Chart, DensityChart, PpChart, QqChart};

mod charts;

/// Default figure size in pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1024, 768);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Failed to render plot '{}': {message}", path.display())]
pub struct PlotError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    /// Picks the format from the extension of `path`; `.svg` (any case) is
    /// [`PlotFormat::Svg`], everything else [`PlotFormat::Png`].
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Output file and pixel size of one plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub path: PathBuf,
    pub size: (u32, u32),
}

impl Figure {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            size: DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    #[must_use]
    pub fn format(&self) -> PlotFormat {
        PlotFormat::from_path(&self.path)
    }
}

/// Histogram of the raw sample with the KDE and fitted densities.
pub fn render_density(
    figure: &Figure,
    overlay: &DensityOverlay,
    title: &str,
) -> Result<(), PlotError> {
    render(figure, &DensityChart { overlay, title })
}

/// Observed against simulated quantiles with the identity line.
pub fn render_qq(figure: &Figure, plot: &QqPlot, title: &str) -> Result<(), PlotError> {
    render(figure, &QqChart { plot, title })
}

/// Empirical against theoretical cumulative probabilities with the identity
/// line.
pub fn render_pp(figure: &Figure, plot: &PpPlot, title: &str) -> Result<(), PlotError> {
    render(figure, &PpChart { plot, title })
}

fn render<C: Chart>(figure: &Figure, chart: &C) -> Result<(), PlotError> {
    let result = match figure.format() {
        PlotFormat::Svg => {
            let root = SVGBackend::new(&figure.path, figure.size).into_drawing_area();
            draw_on(root, chart)
        }
        PlotFormat::Png => {
            let root = BitMapBackend::new(&figure.path, figure.size).into_drawing_area();
            draw_on(root, chart)
        }
    };
    result.map_err(|message| PlotError {
        path: figure.path.clone(),
        message,
    })?;
    info!("Wrote {}", figure.path.display());
    Ok(())
}

fn draw_on<DB, C>(root: DrawingArea<DB, Shift>, chart: &C) -> Result<(), String>
where
    DB: DrawingBackend,
    C: Chart,
{
    chart
        .draw(&root)
        .and_then(|()| root.present())
        .map_err(|err: DrawingAreaErrorKind<DB::ErrorType>| err.to_string())
}

/// Axis range covering the finite values, padded by 5 % on each side.
///
/// Falls back to `0..1` without finite values and to a unit-wide range
/// around a single repeated value.
fn padded_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return 0.0..1.0;
    }
    if max - min <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = 0.05 * (max - min);
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PlotFormat::from_path(Path::new("a/b.svg")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("a/b.SVG")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("a/b.png")), PlotFormat::Png);
        assert_eq!(PlotFormat::from_path(Path::new("plot")), PlotFormat::Png);
        assert_eq!(Figure::new("x.svg").format().extension(), "svg");
    }

    #[test]
    fn test_figure_size() {
        let figure = Figure::new("qq.png");
        assert_eq!(figure.size, DEFAULT_SIZE);
        assert_eq!(figure.with_size(640, 480).size, (640, 480));
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range([0.0, 10.0, f64::NAN, 5.0]);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
        assert_eq!(padded_range([3.0, 3.0]), 2.5..3.5);
        assert_eq!(padded_range(std::iter::empty()), 0.0..1.0);
        assert_eq!(padded_range([f64::INFINITY]), 0.0..1.0);
    }

    #[test]
    fn test_error_message() {
        let err = PlotError {
            path: PathBuf::from("out/qq.png"),
            message: "No such file or directory".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to render plot 'out/qq.png': No such file or directory"
        );
    }
}
