use gardenworld_common::WorldSize;
use gardenworld_dice::{Dice, RandomSource};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, failed};
use crate::habitability::{
    HabitabilityBreakdown, atmosphere_score, hydrographics_score, pressure_score,
    temperature_score,
};
use crate::rolls;

/// A generated garden world.
///
/// Immutable once generated. Pressure and habitability are derived on every
/// query from the stored fields and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenWorld {
    size: WorldSize,
    /// Multiplier against a standard atmosphere.
    atmospheric_mass: f64,
    marginal_atmosphere: bool,
    /// Fraction of the surface covered by liquid, at most 1.0.
    hydrographics: f64,
    /// Kelvin.
    surface_temp: f64,
    absorption: f64,
    blackbody: f64,
    /// Kelvin.
    blackbody_temp: f64,
    /// Relative to a standard world.
    density: f64,
    /// Relative to a standard world.
    gravity: f64,
    resources: i32,
}

impl GardenWorld {
    /// Roll a new world from `source`.
    ///
    /// Rolls run in dependency order: size, atmospheric mass, marginal flag,
    /// hydrographics, surface temperature, absorption, blackbody, density,
    /// gravity, resources. The only failure is a source handing out a value
    /// outside its contract.
    pub fn generate<R: RandomSource>(source: &mut R) -> Result<Self, GenerationError> {
        let _span = tracing::debug_span!("generate_garden_world").entered();
        let mut dice = Dice::new(source);

        let size = rolls::size(&mut dice).map_err(failed("size"))?;
        let atmospheric_mass =
            rolls::atmospheric_mass(&mut dice).map_err(failed("atmospheric mass"))?;
        let marginal_atmosphere =
            rolls::marginal_atmosphere(&mut dice).map_err(failed("marginal atmosphere"))?;
        let hydrographics =
            rolls::hydrographics(&mut dice, size).map_err(failed("hydrographics"))?;
        let surface_temp = rolls::surface_temp(&mut dice).map_err(failed("surface temperature"))?;
        let absorption =
            rolls::absorption(&mut dice, hydrographics).map_err(failed("absorption"))?;
        let blackbody = rolls::blackbody(&mut dice).map_err(failed("blackbody"))?;
        let blackbody_temp =
            surface_temp / blackbody_correction(absorption, atmospheric_mass, blackbody);
        let density = rolls::density(&mut dice).map_err(failed("density"))?;
        let gravity = rolls::gravity(&mut dice, size, blackbody_temp, density)
            .map_err(failed("gravity"))?;
        let resources = rolls::resources(&mut dice).map_err(failed("resources"))?;

        let world = Self {
            size,
            atmospheric_mass,
            marginal_atmosphere,
            hydrographics,
            surface_temp,
            absorption,
            blackbody,
            blackbody_temp,
            density,
            gravity,
            resources,
        };
        tracing::debug!(
            size = %world.size,
            hydrographics = world.hydrographics,
            surface_temp = world.surface_temp,
            gravity = world.gravity,
            "garden world generated"
        );
        Ok(world)
    }

    pub fn size(&self) -> WorldSize {
        self.size
    }

    pub fn atmospheric_mass(&self) -> f64 {
        self.atmospheric_mass
    }

    pub fn marginal_atmosphere(&self) -> bool {
        self.marginal_atmosphere
    }

    pub fn hydrographics(&self) -> f64 {
        self.hydrographics
    }

    pub fn surface_temp(&self) -> f64 {
        self.surface_temp
    }

    pub fn absorption(&self) -> f64 {
        self.absorption
    }

    pub fn blackbody(&self) -> f64 {
        self.blackbody
    }

    pub fn blackbody_temp(&self) -> f64 {
        self.blackbody_temp
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Resource richness, -2 (poor) to 2 (rich).
    pub fn resources(&self) -> i32 {
        self.resources
    }

    /// Factor dividing surface temperature down to blackbody temperature.
    pub fn blackbody_correction(&self) -> f64 {
        blackbody_correction(self.absorption, self.atmospheric_mass, self.blackbody)
    }

    /// Surface pressure in standard atmospheres. Large worlds hold five times
    /// the pressure for the same mass and gravity.
    pub fn atmospheric_pressure(&self) -> f64 {
        let pressure = self.atmospheric_mass * self.gravity;
        if self.size.is_large() {
            pressure * 5.0
        } else {
            pressure
        }
    }

    pub fn habitability_breakdown(&self) -> HabitabilityBreakdown {
        HabitabilityBreakdown {
            pressure: pressure_score(self.atmospheric_pressure()),
            atmosphere: atmosphere_score(self.marginal_atmosphere),
            hydrographics: hydrographics_score(self.hydrographics),
            temperature: temperature_score(self.surface_temp),
        }
    }

    pub fn habitability(&self) -> i32 {
        self.habitability_breakdown().total()
    }
}

fn blackbody_correction(absorption: f64, atmospheric_mass: f64, blackbody: f64) -> f64 {
    absorption * (1.0 + atmospheric_mass * blackbody)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gardenworld_dice::{DiceError, ScriptedSource, SeededSource};

    /// Dice totals for every roll, in sequence order: size, mass, marginal,
    /// hydrographics (1d), surface temp, density, gravity (2d), resources.
    const MIDDLE_TOTALS: [u32; 8] = [10, 10, 10, 3, 10, 10, 7, 10];
    const FRACTIONS_USED: usize = 7;

    fn scripted(totals: [u32; 8], fraction: f64) -> ScriptedSource {
        ScriptedSource::new(totals, [fraction; FRACTIONS_USED])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn with(world: &GardenWorld, edit: impl FnOnce(&mut GardenWorld)) -> GardenWorld {
        let mut copy = world.clone();
        edit(&mut copy);
        copy
    }

    fn middle_world() -> GardenWorld {
        GardenWorld::generate(&mut scripted(MIDDLE_TOTALS, 0.0)).unwrap()
    }

    #[test]
    fn middle_rolls_match_hand_calculation() {
        let w = middle_world();

        assert_eq!(w.size(), WorldSize::Standard);
        assert_close(w.atmospheric_mass(), 0.95);
        assert!(!w.marginal_atmosphere());
        assert_close(w.hydrographics(), 0.65);
        assert_close(w.surface_temp(), 289.0);
        assert_close(w.absorption(), 0.83);
        assert_close(w.blackbody(), 0.11);
        assert_close(w.blackbody_correction(), 0.916_735);
        assert_close(w.blackbody_temp(), 289.0 / 0.916_735);
        assert_close(w.density(), 0.85);

        let factor = (289.0 / 0.916_735 * 0.85_f64).sqrt();
        assert_close(w.gravity(), (0.03 + 4.5 * 0.0035) * factor);
        assert!((w.gravity() - 0.748_906).abs() < 1e-6);

        assert_close(w.atmospheric_pressure(), 0.95 * w.gravity());
        assert!((w.atmospheric_pressure() - 0.711_461).abs() < 1e-6);
        assert_eq!(w.resources(), 0);

        assert_eq!(
            w.habitability_breakdown(),
            HabitabilityBreakdown {
                pressure: 2,
                atmosphere: 1,
                hydrographics: 2,
                temperature: 2,
            }
        );
        assert_eq!(w.habitability(), 7);
    }

    #[test]
    fn roll_sequence_order() {
        let mut source = scripted(MIDDLE_TOTALS, 0.0);
        GardenWorld::generate(&mut source).unwrap();
        assert_eq!(
            source.requests(),
            &[
                (3, 6),
                (3, 6),
                (3, 6),
                (1, 6),
                (3, 6),
                (3, 6),
                (2, 6),
                (3, 6)
            ]
        );
        assert!(source.is_exhausted());
    }

    #[test]
    fn size_roll_boundary() {
        let mut totals = MIDDLE_TOTALS;
        totals[0] = 16;
        let w = GardenWorld::generate(&mut scripted(totals, 0.0)).unwrap();
        assert_eq!(w.size(), WorldSize::Standard);

        totals[0] = 17;
        let w = GardenWorld::generate(&mut scripted(totals, 0.0)).unwrap();
        assert_eq!(w.size(), WorldSize::Large);
    }

    #[test]
    fn large_world_adds_hydrographic_coverage() {
        let standard = middle_world();
        let mut totals = MIDDLE_TOTALS;
        totals[0] = 17;
        let large = GardenWorld::generate(&mut scripted(totals, 0.0)).unwrap();

        assert_close(large.hydrographics() - standard.hydrographics(), 0.2);
        // 0.85 stays in the same absorption band, so nothing upstream of
        // gravity moves.
        assert_close(large.absorption(), standard.absorption());
        assert_close(large.blackbody_temp(), standard.blackbody_temp());
    }

    #[test]
    fn large_world_multiplies_pressure_by_five() {
        let standard = middle_world();
        let large = with(&standard, |w| w.size = WorldSize::Large);

        assert_close(large.gravity(), standard.gravity());
        assert_close(large.atmospheric_mass(), standard.atmospheric_mass());
        assert_close(
            large.atmospheric_pressure(),
            standard.atmospheric_pressure() * 5.0,
        );
    }

    #[test]
    fn large_world_uses_large_gravity_curve() {
        let mut totals = MIDDLE_TOTALS;
        totals[0] = 17;
        let large = GardenWorld::generate(&mut scripted(totals, 0.0)).unwrap();
        let factor = (large.blackbody_temp() * large.density()).sqrt();
        assert_close(large.gravity(), (0.065 + 4.5 * 0.0026) * factor);
    }

    #[test]
    fn hydrographics_at_point_six_scores_two() {
        let w = with(&middle_world(), |w| w.hydrographics = 0.6);
        assert_eq!(w.habitability_breakdown().hydrographics, 2);
        assert_eq!(w.habitability(), 7);
    }

    #[test]
    fn marginal_atmosphere_costs_a_point() {
        let w = with(&middle_world(), |w| w.marginal_atmosphere = true);
        assert_eq!(w.habitability(), 6);
    }

    #[test]
    fn near_vacuum_still_scores_a_pressure_point() {
        let w = with(&middle_world(), |w| w.atmospheric_mass = 0.001);
        assert!(w.atmospheric_pressure() <= 0.01);
        assert_eq!(w.habitability_breakdown().pressure, 1);
    }

    #[test]
    fn derived_values_are_idempotent() {
        let w = GardenWorld::generate(&mut SeededSource::from_seed(31)).unwrap();
        assert_eq!(
            w.atmospheric_pressure().to_bits(),
            w.atmospheric_pressure().to_bits()
        );
        assert_eq!(w.habitability(), w.habitability());
        assert_eq!(w.habitability_breakdown(), w.habitability_breakdown());
    }

    #[test]
    fn same_seed_same_world() {
        let a = GardenWorld::generate(&mut SeededSource::from_seed(42)).unwrap();
        let b = GardenWorld::generate(&mut SeededSource::from_seed(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_worlds_from_one_source_differ() {
        let mut source = SeededSource::from_seed(42);
        let a = GardenWorld::generate(&mut source).unwrap();
        let b = GardenWorld::generate(&mut source).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_worlds_respect_ranges() {
        for seed in 0..2000 {
            let w = GardenWorld::generate(&mut SeededSource::from_seed(seed)).unwrap();

            assert!((0.0..=1.0).contains(&w.hydrographics()), "seed {seed}");
            assert!((-2..=2).contains(&w.resources()), "seed {seed}");
            assert!(matches!(w.size(), WorldSize::Standard | WorldSize::Large));
            assert!((0.25..1.85).contains(&w.atmospheric_mass()), "seed {seed}");
            assert!((247.0..343.0).contains(&w.surface_temp()), "seed {seed}");
            assert!((0.79..1.0).contains(&w.absorption()), "seed {seed}");
            assert!((0.11..0.21).contains(&w.blackbody()), "seed {seed}");
            assert!((0.75..1.25).contains(&w.density()), "seed {seed}");
            assert!(w.gravity() > 0.0, "seed {seed}");
            assert!(w.atmospheric_pressure() > 0.0, "seed {seed}");
            assert!((1..=8).contains(&w.habitability()), "seed {seed}");
        }
    }

    #[test]
    fn both_sizes_appear_over_many_seeds() {
        let large = (0..2000)
            .map(|seed| GardenWorld::generate(&mut SeededSource::from_seed(seed)).unwrap())
            .filter(|w| w.size().is_large())
            .count();
        // 3d6 >= 17 has probability 4/216.
        assert!(large > 0 && large < 100, "large worlds: {large}");
    }

    #[test]
    fn bad_die_names_the_roll() {
        let mut totals = MIDDLE_TOTALS;
        totals[3] = 7;
        let err = GardenWorld::generate(&mut scripted(totals, 0.0)).unwrap_err();
        assert_eq!(err.roll(), "hydrographics");
        assert_eq!(
            err,
            GenerationError::Roll {
                roll: "hydrographics",
                source: DiceError::TotalOutOfRange {
                    count: 1,
                    sides: 6,
                    total: 7
                },
            }
        );
    }

    #[test]
    fn non_finite_fraction_is_fatal() {
        let err = GardenWorld::generate(&mut scripted(MIDDLE_TOTALS, f64::INFINITY)).unwrap_err();
        assert_eq!(err.roll(), "atmospheric mass");
    }

    #[test]
    fn exhausted_source_is_reported() {
        let mut source = ScriptedSource::new(MIDDLE_TOTALS, [0.0; 3]);
        let err = GardenWorld::generate(&mut source).unwrap_err();
        assert_eq!(err.roll(), "absorption");
    }

    #[test]
    fn serde_roundtrip_preserves_snapshot() {
        let w = GardenWorld::generate(&mut SeededSource::from_seed(9)).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: GardenWorld = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), w.size());
        assert_eq!(back.resources(), w.resources());
        assert_eq!(back.habitability(), w.habitability());
    }
}
