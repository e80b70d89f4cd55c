use std::{f64::consts::{PI, TAU}, fmt};

use geo::Coord;
use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum CircleError {
    #[error("radius must be a positive number (got {0})")]
    NonPositiveRadius(f64),
    #[error("radius must be finite (got {0})")]
    NonFiniteRadius(f64),
}


#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Coord,
    radius: f64,
}

impl Circle {
    pub fn new(center: Coord, radius: f64) -> Result<Self, CircleError> {
        // `!(radius > 0.0)` so that NaN is rejected as well
        if !(radius > 0.0) {
            return Err(CircleError::NonPositiveRadius(radius));
        }
        if !radius.is_finite() {
            return Err(CircleError::NonFiniteRadius(radius));
        }

        Ok(Self {
            center,
            radius,
        })
    }

    pub fn from_xy(x: f64, y: f64, radius: f64) -> Result<Self, CircleError> {
        Self::new(Coord { x, y }, radius)
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    pub fn x(&self) -> f64 {
        self.center.x
    }

    pub fn y(&self) -> f64 {
        self.center.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Same radius, different center.
    pub fn with_center(&self, center: Coord) -> Self {
        Self {
            center,
            radius: self.radius,
        }
    }

    /// Same center, different radius. The radius is validated again.
    pub fn with_radius(&self, radius: f64) -> Result<Self, CircleError> {
        Self::new(self.center, radius)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Coord { x: 0.0, y: 0.0 },
            radius: 1.0,
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center: ({}, {}), radius: {})", self.center.x, self.center.y, self.radius)
    }
}
