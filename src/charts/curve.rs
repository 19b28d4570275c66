//! Cardinal spline sampling for curved line charts.
//!
//! The weekly trend is drawn with a tensioned curve rather than straight
//! segments. Control points are placed the way browser charting libraries
//! place them for their default spline mode, then each span is expanded into
//! cubic Bezier samples dense enough that the raster backend can draw plain
//! polylines through them.

/// Sample a smooth curve through `points`.
///
/// A `tension` of `0.0` reproduces the input polyline; the dashboard trend
/// chart uses `0.4`. Each span between neighbouring input points is expanded
/// into `steps` samples. Every input point appears in the output unchanged,
/// in order, so the curve always passes through the data. Inputs with fewer
/// than two points come back as-is.
pub fn sample_curve(points: &[(f64, f64)], tension: f64, steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || steps == 0 {
        return points.to_vec();
    }

    let controls = control_points(points, tension);
    let mut sampled = Vec::with_capacity(points.len() + (points.len() - 1) * (steps - 1));

    for i in 0..points.len() - 1 {
        let from = points[i];
        let to = points[i + 1];
        let (_, leaving) = controls[i];
        let (arriving, _) = controls[i + 1];

        sampled.push(from);
        for step in 1..steps {
            let t = step as f64 / steps as f64;
            sampled.push(cubic_point(from, leaving, arriving, to, t));
        }
    }
    sampled.push(points[points.len() - 1]);

    sampled
}

/// Control points (before, after) for each input point.
///
/// Neighbour distances weight how far the controls reach, so unevenly spaced
/// points do not overshoot. Endpoints use themselves as the missing
/// neighbour, which pins the curve flat at both ends.
fn control_points(points: &[(f64, f64)], tension: f64) -> Vec<((f64, f64), (f64, f64))> {
    let n = points.len();
    let mut controls = Vec::with_capacity(n);

    for i in 0..n {
        let current = points[i];
        let previous = if i == 0 { current } else { points[i - 1] };
        let next = if i + 1 == n { current } else { points[i + 1] };

        let d01 = distance(previous, current);
        let d12 = distance(current, next);
        let total = d01 + d12;

        let (s01, s12) = if total > 0.0 {
            (d01 / total, d12 / total)
        } else {
            (0.0, 0.0)
        };

        let fa = tension * s01;
        let fb = tension * s12;

        let before = (
            current.0 - fa * (next.0 - previous.0),
            current.1 - fa * (next.1 - previous.1),
        );
        let after = (
            current.0 + fb * (next.0 - previous.0),
            current.1 + fb * (next.1 - previous.1),
        );

        controls.push((before, after));
    }

    controls
}

fn cubic_point(
    from: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    to: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let u = 1.0 - t;
    let x = u.powi(3) * from.0
        + 3.0 * u * u * t * c1.0
        + 3.0 * u * t * t * c2.0
        + t.powi(3) * to.0;
    let y = u.powi(3) * from.1
        + 3.0 * u * u * t * c1.1
        + 3.0 * u * t * t * c2.1
        + t.powi(3) * to.1;
    (x, y)
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}
