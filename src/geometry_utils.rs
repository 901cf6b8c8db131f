use crate::GridPoint;

/// Squared distance between two grid points. The pipeline compares and ranks
/// with squared distances wherever possible; only separation needs the root.
pub fn distance2(a: &GridPoint, b: &GridPoint) -> f32 {
    let (r1, c1) = *a;
    let (r2, c2) = *b;

    (r1 - r2) * (r1 - r2) + (c1 - c2) * (c1 - c2)
}

pub fn distance(a: &GridPoint, b: &GridPoint) -> f32 {
    distance2(a, b).sqrt()
}

/// Unweighted midpoint, regardless of how many pixels either point stood for
pub fn midpoint(a: &GridPoint, b: &GridPoint) -> GridPoint {
    ((a.0 + b.0) / 2., (a.1 + b.1) / 2.)
}
