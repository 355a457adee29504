use crate::error::Result;
use crate::process::jump::JumpGap;
use crate::sim::Path;
use polars::prelude::*;

/// Realised paths of a simulation, one per scenario.
pub struct Filtration {
    pub scenarios: Vec<i32>,
    pub paths: Vec<Path>,
}

impl Filtration {
    pub fn new(scenarios: Vec<i32>, paths: Vec<Path>) -> Self {
        debug_assert_eq!(scenarios.len(), paths.len());
        Self { scenarios, paths }
    }

    pub fn path(&self, scenario: i32) -> Option<&Path> {
        let idx = self.scenarios.iter().position(|&s| s == scenario)?;
        self.paths.get(idx)
    }

    /// Value of `scenario` at time index `time`, if a point exists there.
    ///
    /// Jump walks have no points inside their gap.
    pub fn value(&self, scenario: i32, time: i64) -> Option<f64> {
        let points = &self.path(scenario)?.points;
        points
            .binary_search_by_key(&time, |p| p.time)
            .ok()
            .map(|idx| points[idx].value)
    }

    pub fn gap(&self, scenario: i32) -> Option<JumpGap> {
        self.path(scenario)?.gap
    }

    /// Long-format frame with columns `scenario`, `time`, `value`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let row_count = self.paths.iter().map(Path::len).sum();
        let mut scenario = Vec::with_capacity(row_count);
        let mut time = Vec::with_capacity(row_count);
        let mut value = Vec::with_capacity(row_count);

        for (&s, path) in self.scenarios.iter().zip(&self.paths) {
            for p in &path.points {
                scenario.push(s);
                time.push(p.time);
                value.push(p.value);
            }
        }
        Ok(df!["scenario" => scenario, "time" => time, "value" => value]?)
    }
}
