use std::ops::Range;

use plotters::{
    coord::Shift,
    prelude::{
        BLACK, BLUE, CYAN, ChartBuilder, Circle, Color as _, DrawingArea, DrawingAreaErrorKind,
        DrawingBackend, GREEN, LineSeries, MAGENTA, PathElement, RED, RGBColor, Rectangle, WHITE,
    },
};
use porofit_analysis::diagnostics::{DensityOverlay, PpPlot, QqPlot};

use crate::padded_range;

const FIT_COLORS: [RGBColor; 5] = [RED, GREEN, MAGENTA, CYAN, BLACK];

pub(crate) type DrawResult<DB> =
    Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Something that can be drawn onto any plotters backend.
pub(crate) trait Chart {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB>;
}

pub(crate) struct DensityChart<'a> {
    pub(crate) overlay: &'a DensityOverlay,
    pub(crate) title: &'a str,
}

impl Chart for DensityChart<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let overlay = self.overlay;
        let x_range = match (overlay.grid.first(), overlay.grid.last()) {
            (Some(&lower), Some(&upper)) if lower < upper => lower..upper,
            _ => padded_range(overlay.grid.iter().copied()),
        };
        let y_max = overlay
            .histogram
            .bins
            .iter()
            .map(|bin| bin.count as f64)
            .chain(overlay.kde.iter().flat_map(|kde| kde.values.iter().copied()))
            .chain(overlay.fits.iter().flat_map(|fit| fit.values.iter().copied()))
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        let y_range = 0.0..(y_max * 1.1).max(1.0);

        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption(self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;
        chart
            .configure_mesh()
            .x_desc("value")
            .y_desc("count")
            .draw()?;

        chart.draw_series(overlay.histogram.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.range.start, 0.0), (bin.range.end, bin.count as f64)],
                BLUE.mix(0.3).filled(),
            )
        }))?;

        if let Some(kde) = &overlay.kde {
            chart
                .draw_series(LineSeries::new(
                    overlay.grid.iter().copied().zip(kde.values.iter().copied()),
                    BLUE.stroke_width(2),
                ))?
                .label(kde.label.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        }
        for (fit, &color) in overlay.fits.iter().zip(FIT_COLORS.iter().cycle()) {
            chart
                .draw_series(LineSeries::new(
                    overlay.grid.iter().copied().zip(fit.values.iter().copied()),
                    color.stroke_width(2),
                ))?
                .label(fit.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        Ok(())
    }
}

pub(crate) struct QqChart<'a> {
    pub(crate) plot: &'a QqPlot,
    pub(crate) title: &'a str,
}

impl Chart for QqChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let points = &self.plot.points;
        let range = padded_range(points.iter().flat_map(|&(x, y)| [x, y]));
        draw_scatter_with_identity(
            root,
            self.title,
            ("simulated quantiles", "observed quantiles"),
            range,
            points,
        )
    }
}

pub(crate) struct PpChart<'a> {
    pub(crate) plot: &'a PpPlot,
    pub(crate) title: &'a str,
}

impl Chart for PpChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        draw_scatter_with_identity(
            root,
            self.title,
            ("theoretical cumulative probability", "empirical cumulative probability"),
            0.0..1.0,
            &self.plot.points,
        )
    }
}

fn draw_scatter_with_identity<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    (x_desc, y_desc): (&str, &str),
    range: Range<f64>,
    points: &[(f64, f64)],
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(range.clone(), range.clone())?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(range.start, range.start), (range.end, range.end)],
        RED.mix(0.8),
    )))?;
    chart.draw_series(
        points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&point| Circle::new(point, 2, BLUE.filled())),
    )?;
    Ok(())
}
