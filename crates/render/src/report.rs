use gardenworld_common::WorldSize;
use gardenworld_kernel::{GardenWorld, HabitabilityBreakdown};
use serde::Serialize;

use crate::renderer::Renderer;

/// Flat, serializable view of a world with its derived values filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldReport {
    pub size: WorldSize,
    pub atmospheric_mass: f64,
    pub marginal_atmosphere: bool,
    pub hydrographics: f64,
    pub surface_temp: f64,
    pub absorption: f64,
    pub blackbody: f64,
    pub blackbody_temp: f64,
    pub density: f64,
    pub gravity: f64,
    pub atmospheric_pressure: f64,
    pub resources: i32,
    pub habitability: i32,
    pub habitability_breakdown: HabitabilityBreakdown,
}

impl WorldReport {
    pub fn from_world(world: &GardenWorld) -> Self {
        let breakdown = world.habitability_breakdown();
        Self {
            size: world.size(),
            atmospheric_mass: world.atmospheric_mass(),
            marginal_atmosphere: world.marginal_atmosphere(),
            hydrographics: world.hydrographics(),
            surface_temp: world.surface_temp(),
            absorption: world.absorption(),
            blackbody: world.blackbody(),
            blackbody_temp: world.blackbody_temp(),
            density: world.density(),
            gravity: world.gravity(),
            atmospheric_pressure: world.atmospheric_pressure(),
            resources: world.resources(),
            habitability: breakdown.total(),
            habitability_breakdown: breakdown,
        }
    }
}

/// Pretty-printed JSON of a [`WorldReport`].
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    type Output = Result<String, serde_json::Error>;

    fn render(&self, world: &GardenWorld) -> Self::Output {
        serde_json::to_string_pretty(&WorldReport::from_world(world))
    }
}
