use colored::Colorize;
use std::fmt;

/// One labelled quantity printed by a demonstration program.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: &'static str,
    pub value: f64,
}

impl Measurement {
    pub fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }

    /// Same text as `Display`, with the label in bold when colouring is on.
    pub fn render(&self) -> String {
        format!("{}: {:?}", self.label.bold(), self.value)
    }
}

// `{:?}` keeps the fractional part, so 24 prints as `24.0`.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.label, self.value)
    }
}

/// Measurements in the order they were taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &'static str, value: f64) {
        tracing::info!(label, value, "measured");
        self.measurements.push(Measurement::new(label, value));
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value)
    }

    pub fn lines(&self) -> Vec<String> {
        self.measurements.iter().map(|m| m.to_string()).collect()
    }
}
