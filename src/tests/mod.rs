mod config;

use anyhow::Result;

use crate::shape::Circle;

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

pub fn make_circles(triples: &[(f64, f64, f64)]) -> Result<Vec<Circle>> {
    let circles = triples.iter()
        .map(|&(x, y, radius)| Circle::from_xy(x, y, radius))
        .collect::<Result<_, _>>()?;
    Ok(circles)
}

/// The circles used by the demo config.
pub fn demo_circles() -> Result<Vec<Circle>> {
    make_circles(&[
        (0.0, 0.0, 5.0),
        (0.0, 3.0, 2.0),
        (0.0, -2.0, 4.0),
        (2.0, 2.0, 3.0),
        (4.0, 4.0, 1.0),
        (1.0, 0.0, 6.0),
        (3.0, 0.0, 2.0),
        (10.0, 5.0, 2.0),
    ])
}

pub fn centers(group: &[&Circle]) -> Vec<(f64, f64)> {
    group.iter().map(|c| (c.x(), c.y())).collect()
}

/// Position of `circle` in `circles`, by identity.
pub fn index_of(circles: &[Circle], circle: &Circle) -> Option<usize> {
    circles.iter().position(|c| std::ptr::eq(c, circle))
}
