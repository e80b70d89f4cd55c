use super::*;

use crate::{config::{AnalysisConfig, CircleConfig}, shape::CircleError};

fn parse(yaml: &str) -> Result<AnalysisConfig> {
    Ok(serde_norway::from_str(yaml)?)
}

#[test]
fn defaults() -> Result<()> {
    let config = parse("
name: demo
circles:
  - { x: 1.5, y: -2, radius: 3 }
  - { y: 3 }
  - {}
")?;

    assert_eq!(config.name, "demo");
    assert_eq!(config.circles, vec![
        CircleConfig { x: 1.5, y: -2.0, radius: 3.0 },
        CircleConfig { x: 0.0, y: 3.0, radius: 1.0 },
        CircleConfig { x: 0.0, y: 0.0, radius: 1.0 },
    ]);

    let circles = config.circles()?;
    assert_eq!(circles.len(), 3);
    assert_eq!(circles[2], Circle::default());

    Ok(())
}

#[test]
fn no_circles() -> Result<()> {
    let config = parse("name: empty")?;
    assert!(config.circles()?.is_empty());
    Ok(())
}

#[test]
fn invalid_radius_is_reported() -> Result<()> {
    let config = parse("
name: bad
circles:
  - { x: 0, y: 0, radius: 2 }
  - { x: 0, y: 0, radius: 0 }
")?;

    let err = config.circles().unwrap_err();
    assert_eq!(err.downcast_ref::<CircleError>(), Some(&CircleError::NonPositiveRadius(0.0)));
    assert_eq!(format!("{err:#}"), "Circle 2 is invalid: radius must be a positive number (got 0)");

    Ok(())
}

#[test]
fn non_finite_coordinate_is_reported() -> Result<()> {
    let config = parse("
name: bad
circles:
  - { x: .inf, y: 0, radius: 2 }
")?;

    let err = config.circles().unwrap_err();
    assert!(format!("{err:#}").starts_with("Circle 1 is invalid: x must be a finite number"));

    Ok(())
}

#[test]
fn non_numeric_field_is_rejected() {
    assert!(parse("
name: bad
circles:
  - { x: zero, y: 0, radius: 2 }
").is_err());
}
