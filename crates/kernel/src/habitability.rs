//! Habitability scoring.
//!
//! The score is the sum of four independent terms. Each term is an ordered
//! list of guards; the first match wins.

use serde::{Deserialize, Serialize};

/// The four habitability terms, kept apart for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitabilityBreakdown {
    pub pressure: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    pub temperature: i32,
}

impl HabitabilityBreakdown {
    pub fn total(&self) -> i32 {
        self.pressure + self.atmosphere + self.hydrographics + self.temperature
    }
}

/// Pressure term. Bands are upper-inclusive.
///
/// The fallback arm scores +1 for every pressure outside the three bands,
/// near-vacuum included, not only for dense atmospheres above 1.5.
pub fn pressure_score(pressure: f64) -> i32 {
    match pressure {
        p if p > 0.01 && p <= 0.5 => 1,
        p if p > 0.5 && p <= 0.8 => 2,
        p if p > 0.8 && p <= 1.5 => 3,
        _ => 1,
    }
}

/// A breathable (non-marginal) atmosphere scores +1.
pub fn atmosphere_score(marginal: bool) -> i32 {
    if marginal { 0 } else { 1 }
}

/// Liquid coverage term. Bands are lower-inclusive; full coverage scores 0.
pub fn hydrographics_score(hydrographics: f64) -> i32 {
    match hydrographics {
        h if (0.0..0.6).contains(&h) => 1,
        h if (0.6..0.9).contains(&h) => 2,
        h if (0.9..1.0).contains(&h) => 1,
        _ => 0,
    }
}

/// Surface temperature term in kelvin. Bands are lower-inclusive.
pub fn temperature_score(surface_temp: f64) -> i32 {
    match surface_temp {
        t if (255.0..266.0).contains(&t) => 1,
        t if (266.0..322.0).contains(&t) => 2,
        t if (322.0..333.0).contains(&t) => 1,
        _ => 0,
    }
}
