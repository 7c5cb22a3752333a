//! SVG rendering of sweep results and point distributions
//!
//! Every plot is written to a file in the output directory. Rendering only
//! reads the sweep result or point set it is handed, so a failure here never
//! affects values that have already been computed.
use crate::consts::{CONVERGENCE_ZOOM, DEFAULT_BINS};
use crate::histogram::{Histogram1d, Histogram2d, HistogramError};
use crate::point::PointSet;
use crate::sweep::SweepResult;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::f64::consts::PI;
use std::fmt;
use std::path::{Path, PathBuf};

const SIZE: (u32, u32) = (800, 560);
const CAPTION_FONT: (&str, i32) = ("sans-serif", 22);

type DrawResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The output directory could not be created
    CreateDir { path: PathBuf, reason: String },
    /// The plotting backend failed while drawing or writing `path`
    Backend { path: PathBuf, reason: String },
    /// There is nothing to plot
    EmptySweep,
    /// The point distribution could not be binned
    Histogram(HistogramError),
}

/// Writes plots into a directory
///
/// # Example
///
/// ```no_run
/// use montepi::plot::Plotter;
/// use montepi::sweep::{sweep, SweepConfig};
///
/// let mut rng = rand::thread_rng();
/// let result = sweep(&SweepConfig::default(), &mut rng).unwrap();
///
/// let plotter = Plotter::new("plots");
/// let path = plotter.convergence(&result).unwrap();
/// assert!(path.ends_with("convergence.svg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plotter {
    out_dir: PathBuf,
}

impl Plotter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Plotter {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    #[inline]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn target(&self, file_name: &str) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|err| {
            RenderError::CreateDir {
                path: self.out_dir.clone(),
                reason: err.to_string(),
            }
        })?;
        Ok(self.out_dir.join(file_name))
    }

    fn render<F>(&self, file_name: &str, draw: F) -> Result<PathBuf, RenderError>
    where
        F: FnOnce(&Path) -> DrawResult,
    {
        let path = self.target(file_name)?;
        draw(path.as_path()).map_err(|err| RenderError::Backend {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "plot written");
        Ok(path)
    }

    /// Estimate against n, with a reference line at π. The y axis spans
    /// π ± 0.01 and estimates outside it are pinned to the edge.
    pub fn convergence(
        &self,
        result: &SweepResult,
    ) -> Result<PathBuf, RenderError> {
        let x_range = x_range(result)?;
        self.render("convergence.svg", |path| {
            draw_convergence(result, x_range, path)
        })
    }

    /// |π − estimate| against n
    pub fn error(&self, result: &SweepResult) -> Result<PathBuf, RenderError> {
        let x_range = x_range(result)?;
        self.render("error.svg", |path| draw_error(result, x_range, path))
    }

    /// Histograms of the x and y coordinates, side by side
    pub fn marginals(&self, points: &PointSet) -> Result<PathBuf, RenderError> {
        let hx = Histogram1d::unit(&points.xs(), DEFAULT_BINS)?;
        let hy = Histogram1d::unit(&points.ys(), DEFAULT_BINS)?;
        self.render("marginals.svg", |path| draw_marginals(&hx, &hy, path))
    }

    /// 10 × 10 joint histogram drawn as 3D bars
    pub fn density(&self, points: &PointSet) -> Result<PathBuf, RenderError> {
        let hist = Histogram2d::from_points(points, DEFAULT_BINS, DEFAULT_BINS)?;
        self.render("density.svg", |path| draw_density(&hist, path))
    }
}

fn x_range(result: &SweepResult) -> Result<(f64, f64), RenderError> {
    let first = result.sizes().first().ok_or(RenderError::EmptySweep)?;
    let last = result.sizes().last().ok_or(RenderError::EmptySweep)?;
    let (lo, hi) = (*first as f64, *last as f64);
    if lo < hi {
        Ok((lo, hi))
    } else {
        Ok((lo - 0.5, hi + 0.5))
    }
}

fn draw_convergence(
    result: &SweepResult,
    (x_min, x_max): (f64, f64),
    path: &Path,
) -> DrawResult {
    let y_lo = PI - CONVERGENCE_ZOOM;
    let y_hi = PI + CONVERGENCE_ZOOM;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Calculated vs actual π", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Number of points, n")
        .y_desc("Calculated value of π")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            result
                .iter()
                .map(|(n, est)| (n as f64, est.clamp(y_lo, y_hi))),
            &RED,
        ))?
        .label("calculated π")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(vec![(x_min, PI), (x_max, PI)], &BLUE))?
        .label("π")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_error(
    result: &SweepResult,
    (x_min, x_max): (f64, f64),
    path: &Path,
) -> DrawResult {
    let errs = result.abs_errors();
    let y_max = errs.iter().copied().fold(0.0_f64, f64::max).max(1E-3) * 1.1;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Root of squared error", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Number of points, n")
        .y_desc("√((π − calculated π)²)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            result.sizes().iter().map(|&n| n as f64).zip(errs),
            &RED,
        ))?
        .label("√((π − calculated π)²)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_marginal(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    hist: &Histogram1d,
    axis: &str,
) -> DrawResult {
    let y_max = f64::from(hist.max_count().max(1)) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} co-ordinate values", axis), CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(format!("{} co-ordinate values", axis))
        .y_desc(format!("Count of {}", axis))
        .draw()?;

    let edges = hist.edges();
    chart.draw_series(hist.counts().iter().zip(edges.windows(2)).map(
        |(&count, edge)| {
            Rectangle::new(
                [(edge[0], 0.0), (edge[1], f64::from(count))],
                BLUE.mix(0.6).filled(),
            )
        },
    ))?;

    Ok(())
}

fn draw_marginals(
    hx: &Histogram1d,
    hy: &Histogram1d,
    path: &Path,
) -> DrawResult {
    let root = SVGBackend::new(path, (SIZE.0 * 2, SIZE.1)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_marginal(&panels[0], hx, "x")?;
    draw_marginal(&panels[1], hy, "y")?;

    root.present()?;
    Ok(())
}

/// Blue for the shortest bar through red for the tallest
fn bar_color(count: u32, lo: u32, hi: u32) -> HSLColor {
    let t = if hi > lo {
        f64::from(count - lo) / f64::from(hi - lo)
    } else {
        0.0
    };
    HSLColor((1.0 - t) * 240.0 / 360.0, 0.9, 0.5)
}

fn draw_density(hist: &Histogram2d, path: &Path) -> DrawResult {
    let (lo, hi) = (hist.min_count(), hist.max_count());
    let z_max = f64::from(hi.max(1));

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (bins_x, bins_y) = hist.shape();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Histogram of points (x, y) distributed in {} x {} bins",
                bins_x, bins_y
            ),
            CAPTION_FONT,
        )
        .margin(20)
        .build_cartesian_3d(0.0..1.0, 0.0..z_max, 0.0..1.0)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.4;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    // plotters puts the vertical axis second
    chart.draw_series(hist.cells().map(|cell| {
        Cubiod::new(
            [
                (cell.x.0, 0.0, cell.y.0),
                (cell.x.1, f64::from(cell.count), cell.y.1),
            ],
            bar_color(cell.count, lo, hi).filled(),
            &BLACK,
        )
    }))?;

    root.present()?;
    Ok(())
}

impl From<HistogramError> for RenderError {
    fn from(err: HistogramError) -> Self {
        RenderError::Histogram(err)
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Histogram(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, reason } => write!(
                f,
                "could not create output directory {}: {}",
                path.display(),
                reason
            ),
            Self::Backend { path, reason } => {
                write!(f, "could not render {}: {}", path.display(), reason)
            }
            Self::EmptySweep => write!(f, "sweep result is empty"),
            Self::Histogram(err) => write!(f, "histogram failed: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::generate;
    use crate::sweep::{sweep, SweepConfig};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    fn small_result() -> SweepResult {
        let mut rng = Xoshiro256Plus::seed_from_u64(5);
        let config = SweepConfig::new(100, 1_100, 100).unwrap();
        sweep(&config, &mut rng).unwrap()
    }

    #[test]
    fn writes_sweep_plots() {
        let dir = tempfile::tempdir().unwrap();
        let plotter = Plotter::new(dir.path());
        let result = small_result();

        let conv = plotter.convergence(&result).unwrap();
        let err = plotter.error(&result).unwrap();

        assert!(conv.is_file());
        assert!(err.is_file());
        assert_eq!(result, small_result());
    }

    #[test]
    fn writes_distribution_plots() {
        let dir = tempfile::tempdir().unwrap();
        let plotter = Plotter::new(dir.path().join("nested"));
        let mut rng = Xoshiro256Plus::seed_from_u64(6);
        let points = generate(2_000, &mut rng);

        assert!(plotter.marginals(&points).unwrap().is_file());
        assert!(plotter.density(&points).unwrap().is_file());
    }

    #[test]
    fn single_step_sweep_is_plottable() {
        let dir = tempfile::tempdir().unwrap();
        let plotter = Plotter::new(dir.path());
        let result = SweepResult::from_pairs(vec![(1_000, 3.1)]);

        assert!(plotter.convergence(&result).is_ok());
        assert!(plotter.error(&result).is_ok());
    }

    #[test]
    fn empty_sweep_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let plotter = Plotter::new(dir.path());
        assert_eq!(
            plotter.convergence(&SweepResult::default()),
            Err(RenderError::EmptySweep)
        );
    }

    #[test]
    fn unwritable_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let plotter = Plotter::new(blocker.join("plots"));
        let res = plotter.error(&small_result());
        assert!(matches!(res, Err(RenderError::CreateDir { .. })));
    }

    #[test]
    fn bar_colors_span_blue_to_red() {
        let HSLColor(h_lo, ..) = bar_color(0, 0, 10);
        let HSLColor(h_hi, ..) = bar_color(10, 0, 10);
        assert!((h_lo - 240.0 / 360.0).abs() < 1E-12);
        assert!(h_hi.abs() < 1E-12);

        let HSLColor(h_flat, ..) = bar_color(3, 3, 3);
        assert!((h_flat - 240.0 / 360.0).abs() < 1E-12);
    }
}
