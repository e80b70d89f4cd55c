use log::debug;

use crate::shape::{centers_collinear, Circle};


/// Check whether the centers of all the circles lie on one line.
pub fn are_collinear<'a>(circles: impl IntoIterator<Item = &'a Circle>) -> bool {
    let centers: Vec<_> = circles.into_iter().map(Circle::center).collect();
    centers_collinear(&centers)
}


/// Split the circles into groups with collinear centers.
///
/// Greedy, left to right: every circle not yet grouped starts a new group, and
/// every later ungrouped circle joins it if the group stays collinear with it.
/// The result refers back into `circles`.
pub fn group_by_collinearity(circles: &[Circle]) -> Vec<Vec<&Circle>> {
    let mut processed = vec![false; circles.len()];
    let mut groups = vec![];

    for (i, seed) in circles.iter().enumerate() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let mut group = vec![seed];
        let mut centers = vec![seed.center()];

        for (j, candidate) in circles.iter().enumerate().skip(i + 1) {
            if processed[j] {
                continue;
            }

            centers.push(candidate.center());
            if centers_collinear(&centers) {
                group.push(candidate);
                processed[j] = true;
            } else {
                centers.pop();
            }
        }

        debug!("Group {} seeded by circle {i} has {} member(s)", groups.len(), group.len());

        groups.push(group);
    }

    groups
}


/// Circles with the smallest and largest area and perimeter.
///
/// On ties the circle that comes first wins.
#[derive(Clone, Copy, Debug)]
pub struct Extremes<'a> {
    pub min_area: &'a Circle,
    pub max_area: &'a Circle,
    pub min_perimeter: &'a Circle,
    pub max_perimeter: &'a Circle,
}

/// Returns `None` when there are no circles.
pub fn find_extremes(circles: &[Circle]) -> Option<Extremes<'_>> {
    let (first, rest) = circles.split_first()?;

    let mut extremes = Extremes {
        min_area: first,
        max_area: first,
        min_perimeter: first,
        max_perimeter: first,
    };

    for circle in rest {
        if circle.area() < extremes.min_area.area() {
            extremes.min_area = circle;
        }
        if circle.area() > extremes.max_area.area() {
            extremes.max_area = circle;
        }
        if circle.perimeter() < extremes.min_perimeter.perimeter() {
            extremes.min_perimeter = circle;
        }
        if circle.perimeter() > extremes.max_perimeter.perimeter() {
            extremes.max_perimeter = circle;
        }
    }

    Some(extremes)
}


#[derive(Debug)]
pub struct Analysis<'a> {
    pub groups: Vec<Vec<&'a Circle>>,
    pub extremes: Option<Extremes<'a>>,
}

impl<'a> Analysis<'a> {
    pub fn new(circles: &'a [Circle]) -> Self {
        Self {
            groups: group_by_collinearity(circles),
            extremes: find_extremes(circles),
        }
    }
}
