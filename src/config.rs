use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::shape::Circle;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CircleConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
        }
    }
}

impl CircleConfig {
    pub fn build(&self) -> Result<Circle> {
        ensure!(self.x.is_finite(), "x must be a finite number (got {})", self.x);
        ensure!(self.y.is_finite(), "y must be a finite number (got {})", self.y);
        Ok(Circle::from_xy(self.x, self.y, self.radius)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    #[serde(default)]
    pub circles: Vec<CircleConfig>,
}

impl AnalysisConfig {
    pub fn circles(&self) -> Result<Vec<Circle>> {
        self.circles.iter()
            .enumerate()
            .map(|(i, c)| c.build().with_context(|| format!("Circle {} is invalid", i + 1)))
            .collect()
    }
}
