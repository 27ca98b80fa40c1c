use gardenworld_kernel::GardenWorld;

/// Output-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    fn render(&self, world: &GardenWorld) -> Self::Output;
}

/// Plain `Label: value` report, one statistic per line.
///
/// Mass, coverage, gravity and pressure print with two decimals; both
/// temperatures round to whole kelvin.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, world: &GardenWorld) -> String {
        let mut out = String::new();
        out.push_str(&format!("Size: {}\n", world.size().label()));
        out.push_str(&format!(
            "Atmospheric Mass: {:.2}\n",
            world.atmospheric_mass()
        ));
        out.push_str(&format!(
            "Marginal Atmosphere?: {}\n",
            world.marginal_atmosphere()
        ));
        out.push_str(&format!(
            "Hydrographic Coverage: {:.2}\n",
            world.hydrographics()
        ));
        out.push_str(&format!(
            "Surface Temperature: {:.0}\n",
            world.surface_temp().round()
        ));
        out.push_str(&format!(
            "Blackbody Temperature: {:.0}\n",
            world.blackbody_temp().round()
        ));
        out.push_str(&format!("Surface Gravity: {:.2}\n", world.gravity()));
        out.push_str(&format!(
            "Atmospheric Pressure: {:.2}\n",
            world.atmospheric_pressure()
        ));
        out.push_str(&format!("Resources: {}\n", world.resources()));
        out.push_str(&format!("Habitability: {}\n", world.habitability()));
        out
    }
}
