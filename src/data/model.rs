//! Wire types exchanged with the simulation engine.
//!
//! Field names on the wire follow the engine's JSON schema (`m`, `M`, `Cd`, ...);
//! the Rust side uses descriptive names and maps them with `serde(rename)`.

use serde::{Deserialize, Serialize};

use super::points::DomainPoint;

/// Physical parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Rower mass (kg).
    #[serde(rename = "m")]
    pub rower_mass: f64,
    /// Boat mass (kg).
    #[serde(rename = "M")]
    pub boat_mass: f64,
    /// Total rower displacement relative to the boat (m).
    #[serde(rename = "L")]
    pub displacement: f64,
    /// Duration of the aerial phase (s).
    #[serde(rename = "T")]
    pub duration: f64,
    /// Water density (kg/m³).
    #[serde(rename = "rho")]
    pub water_density: f64,
    /// Wetted cross section (m²).
    #[serde(rename = "S")]
    pub cross_section: f64,
    #[serde(rename = "Cd")]
    pub drag_coefficient: f64,
    /// Initial boat velocity (m/s).
    #[serde(rename = "y0_dot")]
    pub initial_velocity: f64,
    /// Degree of the rower kinematics polynomial (>= 3).
    pub degree: u32,
    /// Optional override for the free high-order coefficients (a4, a5, ...).
    #[serde(default)]
    pub high_coeffs: Option<Vec<f64>>,
}

impl SimulationParameters {
    /// Parameter set used when the engine cannot provide its defaults.
    pub fn fallback() -> Self {
        Self {
            rower_mass: 80.0,
            boat_mass: 20.0,
            displacement: -1.0,
            duration: 1.0,
            water_density: 1000.0,
            cross_section: 0.5,
            drag_coefficient: 0.004,
            initial_velocity: 10.0,
            degree: 4,
            high_coeffs: None,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Scalar summary computed by the engine for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnitudes {
    /// Initial kinetic energy (J).
    #[serde(rename = "Ei")]
    pub initial_energy: f64,
    /// Final kinetic energy (J).
    #[serde(rename = "Ef")]
    pub final_energy: f64,
    #[serde(rename = "dE_sist")]
    pub system_energy_change: f64,
    /// Energy spent by the rower (J).
    #[serde(rename = "dE_rower")]
    pub rower_energy: f64,
    /// Final boat position (m).
    #[serde(rename = "p_f")]
    pub final_position: f64,
    /// Final boat velocity (m/s).
    #[serde(rename = "v_f")]
    pub final_velocity: f64,
    #[serde(rename = "dv")]
    pub velocity_change: f64,
}

/// Result of a calculation or a polynomial fit. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Shared time grid.
    pub tt: Vec<f64>,
    pub xx: Vec<f64>,
    pub xx_dot: Vec<f64>,
    pub xx_ddot: Vec<f64>,
    pub yy: Vec<f64>,
    pub yy_dot: Vec<f64>,
    pub yy_ddot: Vec<f64>,
    pub magnitudes: Magnitudes,
    /// Human-readable (LaTeX) polynomial expression.
    pub polynomial_latex: String,
    pub coefficients: Vec<f64>,
}

/// Body of `POST /api/fit-polynomial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    pub parameters: SimulationParameters,
    pub points: Vec<DomainPoint>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_use_engine_field_names() {
        let json = serde_json::to_value(SimulationParameters::fallback()).unwrap();
        assert_eq!(json["m"], 80.0);
        assert_eq!(json["M"], 20.0);
        assert_eq!(json["Cd"], 0.004);
        assert_eq!(json["y0_dot"], 10.0);
        assert_eq!(json["degree"], 4);
        assert!(json["high_coeffs"].is_null());
    }

    #[test]
    fn defaults_response_without_high_coeffs_parses() {
        let body = r#"{"m":80,"M":20,"L":-1,"T":1,"rho":1000,"S":0.5,"Cd":0.004,"y0_dot":10,"degree":4}"#;
        let params: SimulationParameters = serde_json::from_str(body).unwrap();
        assert_eq!(params, SimulationParameters::fallback());
    }
}
