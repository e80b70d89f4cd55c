use std::fmt::Write;

use crate::{analysis::Analysis, shape::Circle};


fn write_circles(out: &mut String, circles: &[Circle]) -> std::fmt::Result {
    writeln!(out, "Circles:")?;

    for (i, c) in circles.iter().enumerate() {
        writeln!(out, "{:>2}. {c}", i + 1)?;
        writeln!(out, "    area: {:.2}, perimeter: {:.2}", c.area(), c.perimeter())?;
    }

    Ok(())
}


fn write_groups(out: &mut String, groups: &[Vec<&Circle>]) -> std::fmt::Result {
    writeln!(out, "Collinear groups:")?;

    for (i, group) in groups.iter().enumerate() {
        writeln!(out, "Group {}:", i + 1)?;
        for c in group {
            writeln!(out, "  - {c}")?;
        }
    }

    Ok(())
}


fn write_extremes(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    writeln!(out, "Extremes:")?;

    let Some(e) = &analysis.extremes else {
        return writeln!(out, "  no circles");
    };

    writeln!(out, "  smallest area: {} ({:.2})", e.min_area, e.min_area.area())?;
    writeln!(out, "  largest area: {} ({:.2})", e.max_area, e.max_area.area())?;
    writeln!(out, "  smallest perimeter: {} ({:.2})", e.min_perimeter, e.min_perimeter.perimeter())?;
    writeln!(out, "  largest perimeter: {} ({:.2})", e.max_perimeter, e.max_perimeter.perimeter())
}


fn write_report(out: &mut String, name: &str, circles: &[Circle], analysis: &Analysis) -> std::fmt::Result {
    writeln!(out, "=== {name} ===")?;
    write_circles(out, circles)?;
    writeln!(out)?;
    write_groups(out, &analysis.groups)?;
    writeln!(out)?;
    write_extremes(out, analysis)
}


pub fn make_report(name: &str, circles: &[Circle], analysis: &Analysis) -> String {
    let mut out = String::new();
    // Writing into a String can not fail
    let _ = write_report(&mut out, name, circles, analysis);
    out
}
