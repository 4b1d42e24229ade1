//! Cubic spline evaluation and rasterization.
//!
//! Curves are evaluated by forward differencing: the position and its
//! first, second, and third finite differences are derived once from the
//! closed-form cubic coefficients, then every sample costs three additions
//! per axis. The recurrence is algebraically exact for a cubic, so the last
//! sample lands on the end point up to float rounding.
//!
//! Integer and floating-point output share one evaluator, parameterized by
//! a [`SampleFormat`] policy that decides how accumulated values leave the
//! recurrence.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::CubicBezier;
use crate::render::line::draw_line;
use crate::render::Drawable;

/// Hard cap on samples per curve.
pub const MAX_SAMPLES: usize = 64;

/// Output policy for spline samples.
pub trait SampleFormat {
    /// Emitted coordinate type.
    type Coord: Copy + PartialEq + std::fmt::Debug;

    /// Bias added to the running accumulator before stepping begins.
    const BIAS: f32;

    /// Convert an accumulated value to an output coordinate.
    fn emit(value: f32) -> Self::Coord;
}

/// Integer output: round half-up by truncating after a `+0.5` bias.
#[derive(Debug, Clone, Copy)]
pub enum Rounded {}

impl SampleFormat for Rounded {
    type Coord = i32;
    const BIAS: f32 = 0.5;

    fn emit(value: f32) -> i32 {
        value as i32
    }
}

/// Floating-point output: accumulated values pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub enum Exact {}

impl SampleFormat for Exact {
    type Coord = f32;
    const BIAS: f32 = 0.0;

    fn emit(value: f32) -> f32 {
        value
    }
}

/// Sample points along one curve: parallel x/y sequences of equal length.
///
/// Scratch state, recomputed per draw call. The first sample equals the
/// curve's start point; the last lands on its end point up to rounding.
#[derive(Debug, Clone)]
pub struct SampleBuffer<F: SampleFormat> {
    /// X coordinates, in curve order.
    pub xs: Vec<F::Coord>,
    /// Y coordinates, in curve order.
    pub ys: Vec<F::Coord>,
}

impl<F: SampleFormat> SampleBuffer<F> {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Evaluate `samples` points along `curve` by forward differencing.
///
/// `samples` must be in `2..=MAX_SAMPLES`; [`sample_count`] always returns a
/// value in that range.
#[must_use]
pub fn evaluate<F: SampleFormat>(curve: &CubicBezier, samples: usize) -> SampleBuffer<F> {
    debug_assert!(
        (2..=MAX_SAMPLES).contains(&samples),
        "sample count out of range: {samples}"
    );

    let dt = 1.0 / (samples - 1) as f32;

    let mut xs = Vec::with_capacity(samples);
    let mut ys = Vec::with_capacity(samples);
    sample_axis::<F>(
        [curve.p0.x, curve.p1.x, curve.p2.x, curve.p3.x],
        dt,
        samples,
        &mut xs,
    );
    sample_axis::<F>(
        [curve.p0.y, curve.p1.y, curve.p2.y, curve.p3.y],
        dt,
        samples,
        &mut ys,
    );

    SampleBuffer { xs, ys }
}

/// Forward-difference one coordinate axis.
///
/// `p` holds the four control values for this axis, start to end.
fn sample_axis<F: SampleFormat>(p: [f32; 4], dt: f32, samples: usize, out: &mut Vec<F::Coord>) {
    let dt2 = dt * dt;
    let dt3 = dt2 * dt;

    let dt2_term = dt2 * (3.0 * (p[2] - 2.0 * p[1] + p[0]));
    let dt3_term = dt3 * (p[3] + 3.0 * (p[1] - p[2]) - p[0]);

    let ddd = 6.0 * dt3_term;
    let mut dd = -6.0 * dt3_term + 2.0 * dt2_term;
    let mut d = dt3_term - dt2_term + 3.0 * dt * (p[1] - p[0]);
    let mut v = p[0] + F::BIAS;

    out.push(F::emit(p[0]));

    for _ in 1..samples {
        dd += ddd;
        d += dd;
        v += d;
        out.push(F::emit(v));
    }
}

/// Pick a sample count for `curve` from its control-polygon length.
///
/// `sqrt(length) * 1.2`, truncated, clamped to `[2, MAX_SAMPLES]`. Monotone
/// non-decreasing in the polygon length. Deliberately coarse: a density
/// heuristic, not a tolerance-bounded flattening scheme.
#[must_use]
pub fn sample_count(curve: &CubicBezier) -> usize {
    let raw = (curve.polygon_length().sqrt() * 1.2) as usize;
    raw.clamp(2, MAX_SAMPLES)
}

/// Draw `curve` as a polyline of integer-quantized sample points.
///
/// Computes the sample count from the curve's control-polygon length,
/// evaluates, then connects consecutive samples with [`draw_line`]. Visual
/// continuity relies entirely on sample density; there is no joint
/// smoothing.
pub fn draw_spline(bmp: &mut Bitmap, curve: &CubicBezier, color: Color) {
    let samples = sample_count(curve);
    let buf = evaluate::<Rounded>(curve, samples);

    for i in 1..buf.len() {
        draw_line(bmp, buf.xs[i - 1], buf.ys[i - 1], buf.xs[i], buf.ys[i], color);
    }
}

/// Draw `curve` from floating-point samples.
///
/// Same shape as [`draw_spline`], but sample coordinates stay unrounded
/// until each segment endpoint is truncated at line-draw time. Preferred
/// for control points that arrive in floating point, e.g. from a vector
/// path source.
pub fn draw_spline_f(bmp: &mut Bitmap, curve: &CubicBezier, color: Color) {
    let samples = sample_count(curve);
    let buf = evaluate::<Exact>(curve, samples);

    for i in 1..buf.len() {
        draw_line(
            bmp,
            buf.xs[i - 1] as i32,
            buf.ys[i - 1] as i32,
            buf.xs[i] as i32,
            buf.ys[i] as i32,
            color,
        );
    }
}

impl Drawable for CubicBezier {
    fn draw(&self, bmp: &mut Bitmap, color: Color) {
        draw_spline_f(bmp, self, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use approx::assert_relative_eq;

    /// The arch curve from the original demo family: endpoints on the x
    /// axis, control points lifting the middle.
    fn arch() -> CubicBezier {
        CubicBezier::from_int_coords([0, 0, 0, 10, 10, 10, 10, 0])
    }

    #[test]
    fn test_exact_endpoints() {
        let buf = evaluate::<Exact>(&arch(), 5);

        assert_eq!(buf.len(), 5);
        assert_eq!(buf.xs[0], 0.0);
        assert_eq!(buf.ys[0], 0.0);
        assert_relative_eq!(buf.xs[4], 10.0, epsilon = 1e-3);
        assert_relative_eq!(buf.ys[4], 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_exact_arch_samples() {
        // dt = 0.25 and integer control values keep every intermediate
        // dyadic, so the forward differences are exact here.
        let buf = evaluate::<Exact>(&arch(), 5);

        assert_eq!(buf.xs, vec![0.0, 1.5625, 5.0, 8.4375, 10.0]);
        assert_eq!(buf.ys, vec![0.0, 5.625, 7.5, 5.625, 0.0]);
    }

    #[test]
    fn test_rounded_arch_samples() {
        let buf = evaluate::<Rounded>(&arch(), 5);

        assert_eq!(buf.xs, vec![0, 2, 5, 8, 10]);
        assert_eq!(buf.ys, vec![0, 6, 8, 6, 0]);
    }

    #[test]
    fn test_arch_x_monotone_y_arched() {
        let buf = evaluate::<Exact>(&arch(), 5);

        for w in buf.xs.windows(2) {
            assert!(w[1] > w[0], "x not monotone: {:?}", buf.xs);
        }
        assert!(buf.ys[1] > buf.ys[0]);
        assert!(buf.ys[2] > buf.ys[1]);
        assert!(buf.ys[3] < buf.ys[2]);
        assert!(buf.ys[4] < buf.ys[3]);
    }

    #[test]
    fn test_rounded_matches_exact_within_one() {
        let curve = CubicBezier::from_int_coords([3, 7, 40, 90, 120, 10, 200, 150]);
        let samples = sample_count(&curve);

        let rounded = evaluate::<Rounded>(&curve, samples);
        let exact = evaluate::<Exact>(&curve, samples);

        assert_eq!(rounded.len(), exact.len());
        for i in 0..rounded.len() {
            assert!((rounded.xs[i] as f32 - exact.xs[i]).abs() <= 1.01, "x sample {i}");
            assert!((rounded.ys[i] as f32 - exact.ys[i]).abs() <= 1.01, "y sample {i}");
        }
    }

    #[test]
    fn test_degenerate_curve_samples_identical() {
        let p = Point::new(5.0, 5.0);
        let curve = CubicBezier::new(p, p, p, p);

        assert_eq!(sample_count(&curve), 2);

        let buf = evaluate::<Rounded>(&curve, 2);
        assert_eq!(buf.xs, vec![5, 5]);
        assert_eq!(buf.ys, vec![5, 5]);
    }

    #[test]
    fn test_degenerate_spline_plots_single_pixel() {
        let mut bmp = Bitmap::new(10, 10).unwrap();
        let p = Point::new(5.0, 5.0);
        draw_spline(&mut bmp, &CubicBezier::new(p, p, p, p), Color::new(1));

        let mut lit = Vec::new();
        for y in 0..10 {
            for x in 0..10 {
                if bmp.get_pixel(x, y) == Color::new(1) {
                    lit.push((x, y));
                }
            }
        }
        assert_eq!(lit, vec![(5, 5)]);
    }

    #[test]
    fn test_sample_count_monotone_and_capped() {
        let mut last = 0;
        for k in 0..1200 {
            let curve =
                CubicBezier::from_int_coords([0, 0, k, 0, 2 * k, 0, 3 * k, 0]);
            let n = sample_count(&curve);
            assert!(n >= last, "count decreased at k={k}");
            assert!((2..=MAX_SAMPLES).contains(&n));
            last = n;
        }
        // Long enough curves saturate the cap.
        assert_eq!(last, MAX_SAMPLES);
    }

    #[test]
    fn test_spline_endpoints_plotted() {
        let mut bmp = Bitmap::new(64, 64).unwrap();
        let curve = CubicBezier::from_int_coords([2, 2, 20, 60, 40, 0, 60, 60]);
        draw_spline(&mut bmp, &curve, Color::new(3));

        assert_eq!(bmp.get_pixel(2, 2), Color::new(3));
        assert_eq!(bmp.get_pixel(60, 60), Color::new(3));
    }

    #[test]
    fn test_drawable_cubic() {
        let mut bmp = Bitmap::new(64, 64).unwrap();
        let curve = CubicBezier::from_int_coords([2, 2, 20, 60, 40, 0, 60, 60]);
        curve.draw(&mut bmp, Color::new(3));

        assert_eq!(bmp.get_pixel(2, 2), Color::new(3));
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
