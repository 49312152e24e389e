//! Optional metric plotting, compiled only with the `widget` feature.

use plotters::prelude::*;

use std::path::Path;

use crate::error::{OrdBoostError, Result};
use crate::model::OrdBoost;


const DEFAULT_SIZE: (u32, u32) = (800, 500);


/// Renders per-iteration metric curves to an SVG file.
///
/// Collect one or more labelled series, typically a model's
/// [`eval_history`](OrdBoost::eval_history),
/// and draw them as line charts.
/// # Example
/// ```no_run
/// use ordboost::MetricVisualizer;
///
/// # fn main() -> ordboost::error::Result<()> {
/// # let model = ordboost::OrdBoost::new();
/// let mut viz = MetricVisualizer::new()
///     .title("training loss");
/// viz.add_model("train", &model);
/// viz.draw_svg("loss.svg")?;
/// # Ok(())
/// # }
/// ```
pub struct MetricVisualizer {
    title: String,
    size: (u32, u32),
    series: Vec<(String, Vec<f64>)>,
}


impl MetricVisualizer {
    /// Construct an empty visualizer.
    pub fn new() -> Self {
        Self {
            title: "metric".to_string(),
            size: DEFAULT_SIZE,
            series: Vec::new(),
        }
    }


    /// Set the chart title.
    /// Default is `"metric"`.
    pub fn title<T: ToString>(mut self, title: T) -> Self {
        self.title = title.to_string();
        self
    }


    /// Set the chart size in pixels.
    /// Default is `800x500`.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }


    /// Add a labelled series of metric values.
    pub fn add_series<T: ToString>(&mut self, label: T, values: &[f64]) {
        self.series.push((label.to_string(), values.to_vec()));
    }


    /// Add a model's recorded training history as a series.
    pub fn add_model<T: ToString>(&mut self, label: T, model: &OrdBoost) {
        self.add_series(label, model.eval_history());
    }


    /// Render every collected series into an SVG file at `path`.
    pub fn draw_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let n_point = self.series.iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0);
        if n_point == 0 {
            return Err(OrdBoostError::InvalidParameter {
                name: "series",
                reason: "nothing to draw; add a non-empty series first"
                    .to_string(),
            });
        }

        let (lo, hi) = self.value_range();
        let x_max = (n_point.max(2) - 1) as f64;

        let root = SVGBackend::new(path.as_ref(), self.size)
            .into_drawing_area();
        root.fill(&WHITE).map_err(widget_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, lo..hi)
            .map_err(widget_err)?;

        chart.configure_mesh()
            .x_desc("iteration")
            .y_desc("metric")
            .draw()
            .map_err(widget_err)?;

        for (i, (label, values)) in self.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let points = values.iter()
                .enumerate()
                .map(|(x, &y)| (x as f64, y));

            chart.draw_series(LineSeries::new(points, &color))
                .map_err(widget_err)?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color)
                });
        }

        chart.configure_series_labels()
            .border_style(BLACK)
            .draw()
            .map_err(widget_err)?;

        root.present().map_err(widget_err)?;
        Ok(())
    }


    /// The value range over all series, padded so that flat curves
    /// stay visible.
    fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        self.series.iter()
            .flat_map(|(_, values)| values)
            .for_each(|&v| {
                lo = lo.min(v);
                hi = hi.max(v);
            });

        let pad = 0.05 * (hi - lo);
        if pad > 0.0 {
            (lo - pad, hi + pad)
        } else {
            (lo - 1.0, hi + 1.0)
        }
    }
}


impl Default for MetricVisualizer {
    fn default() -> Self {
        Self::new()
    }
}


fn widget_err<E: std::fmt::Display>(e: E) -> OrdBoostError {
    OrdBoostError::Widget(e.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_visualizer_refuses_to_draw() {
        let viz = MetricVisualizer::new();
        let mut path = std::env::temp_dir();
        path.push("ordboost_empty_widget.svg");

        let err = viz.draw_svg(&path).unwrap_err();
        assert!(matches!(err, OrdBoostError::InvalidParameter { .. }));
    }


    #[test]
    fn draws_a_series_to_svg() {
        let mut viz = MetricVisualizer::new().title("loss");
        viz.add_series("train", &[3.0, 2.0, 1.5, 1.2]);

        let mut path = std::env::temp_dir();
        path.push("ordboost_widget_series.svg");
        viz.draw_svg(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        std::fs::remove_file(&path).ok();
    }


    #[test]
    fn flat_series_gets_a_padded_range() {
        let mut viz = MetricVisualizer::new();
        viz.add_series("flat", &[1.0, 1.0, 1.0]);
        let (lo, hi) = viz.value_range();
        assert!(lo < 1.0 && 1.0 < hi);
    }
}
