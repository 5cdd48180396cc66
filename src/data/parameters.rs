//! The simulation parameter form: one [`NumericField`] per engine parameter.

use super::model::SimulationParameters;
use super::numeric_field::NumericField;

/// Identifies one editable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    RowerMass,
    BoatMass,
    Displacement,
    Duration,
    WaterDensity,
    CrossSection,
    DragCoefficient,
    InitialVelocity,
    Degree,
}

/// Static range, step and labelling of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: ParamKey,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: Option<&'static str>,
}

/// Form fields in display order.
pub const FIELD_SPECS: [FieldSpec; 9] = [
    FieldSpec { key: ParamKey::RowerMass, label: "Rower Mass (m)", min: 40.0, max: 120.0, step: 1.0, unit: Some("kg") },
    FieldSpec { key: ParamKey::BoatMass, label: "Boat Mass (M)", min: 10.0, max: 50.0, step: 0.5, unit: Some("kg") },
    FieldSpec { key: ParamKey::Displacement, label: "Displacement (L)", min: -2.0, max: 0.0, step: 0.05, unit: Some("m") },
    FieldSpec { key: ParamKey::Duration, label: "Duration (T)", min: 0.5, max: 2.0, step: 0.05, unit: Some("s") },
    FieldSpec { key: ParamKey::WaterDensity, label: "Water Density (ρ)", min: 900.0, max: 1100.0, step: 10.0, unit: Some("kg/m³") },
    FieldSpec { key: ParamKey::CrossSection, label: "Cross Section (S)", min: 0.1, max: 1.0, step: 0.05, unit: Some("m²") },
    FieldSpec { key: ParamKey::DragCoefficient, label: "Drag Coeff. (Cd)", min: 0.001, max: 0.01, step: 0.001, unit: None },
    FieldSpec { key: ParamKey::InitialVelocity, label: "Initial Velocity (y₀')", min: 0.0, max: 20.0, step: 0.5, unit: Some("m/s") },
    FieldSpec { key: ParamKey::Degree, label: "Polynomial Degree", min: 3.0, max: 8.0, step: 1.0, unit: None },
];

impl ParamKey {
    pub fn spec(self) -> &'static FieldSpec {
        FIELD_SPECS
            .iter()
            .find(|s| s.key == self)
            .unwrap_or(&FIELD_SPECS[0])
    }

    fn read(self, p: &SimulationParameters) -> f64 {
        match self {
            ParamKey::RowerMass => p.rower_mass,
            ParamKey::BoatMass => p.boat_mass,
            ParamKey::Displacement => p.displacement,
            ParamKey::Duration => p.duration,
            ParamKey::WaterDensity => p.water_density,
            ParamKey::CrossSection => p.cross_section,
            ParamKey::DragCoefficient => p.drag_coefficient,
            ParamKey::InitialVelocity => p.initial_velocity,
            ParamKey::Degree => p.degree as f64,
        }
    }

    fn write(self, p: &mut SimulationParameters, v: f64) {
        match self {
            ParamKey::RowerMass => p.rower_mass = v,
            ParamKey::BoatMass => p.boat_mass = v,
            ParamKey::Displacement => p.displacement = v,
            ParamKey::Duration => p.duration = v,
            ParamKey::WaterDensity => p.water_density = v,
            ParamKey::CrossSection => p.cross_section = v,
            ParamKey::DragCoefficient => p.drag_coefficient = v,
            ParamKey::InitialVelocity => p.initial_velocity = v,
            ParamKey::Degree => p.degree = v.round().max(3.0) as u32,
        }
    }
}

/// All parameter fields plus the pass-through `high_coeffs` override.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    fields: Vec<(ParamKey, NumericField)>,
    high_coeffs: Option<Vec<f64>>,
    loaded: bool,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::new(&SimulationParameters::fallback())
    }
}

impl ParameterForm {
    pub fn new(params: &SimulationParameters) -> Self {
        let fields = FIELD_SPECS
            .iter()
            .map(|spec| {
                let field = NumericField::new(spec.key.read(params), spec.min, spec.max, spec.step);
                let field = if spec.key == ParamKey::Degree {
                    field.integer()
                } else {
                    field
                };
                (spec.key, field)
            })
            .collect();
        Self {
            fields,
            high_coeffs: params.high_coeffs.clone(),
            loaded: false,
        }
    }

    /// Overwrite every field from `params`, discarding pending edits.
    pub fn load(&mut self, params: &SimulationParameters) {
        for (key, field) in self.fields.iter_mut() {
            field.set_external(key.read(params));
        }
        self.high_coeffs = params.high_coeffs.clone();
        self.loaded = true;
    }

    /// `true` once defaults (or the fallback) have been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn field(&self, key: ParamKey) -> Option<&NumericField> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, f)| f)
    }

    pub fn field_mut(&mut self, key: ParamKey) -> Option<&mut NumericField> {
        self.fields.iter_mut().find(|(k, _)| *k == key).map(|(_, f)| f)
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&'static FieldSpec, &mut NumericField)> {
        self.fields.iter_mut().map(|(k, f)| (k.spec(), f))
    }

    /// Build request parameters from the committed values.
    pub fn to_parameters(&self) -> SimulationParameters {
        let mut params = SimulationParameters::fallback();
        for (key, field) in &self.fields {
            key.write(&mut params, field.value());
        }
        params.high_coeffs = self.high_coeffs.clone();
        params
    }
}
