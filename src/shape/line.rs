use geo::Coord;

use super::EPSILON;


/// Check whether all the points lie on one straight line.
///
/// Vertical and horizontal lines are detected by exact coordinate equality.
/// Otherwise the line is the one through the first two points, and every point
/// has to be within `EPSILON` of it vertically.
pub fn centers_collinear(points: &[Coord]) -> bool {
    let [p1, p2, ..] = points else {
        return true;
    };

    if points.iter().all(|p| p.x == p1.x) {
        return true;
    }

    if points.iter().all(|p| p.y == p1.y) {
        return true;
    }

    // The first two points define a vertical line, but not everything is on it
    if p2.x == p1.x {
        return false;
    }

    let slope = (p2.y - p1.y) / (p2.x - p1.x);

    points.iter().all(|p| {
        let expected_y = p1.y + slope * (p.x - p1.x);
        (p.y - expected_y).abs() < EPSILON
    })
}
