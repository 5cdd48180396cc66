#![allow(dead_code)]

use rowplot::data::model::{Magnitudes, SimulationResult};

/// Small synthetic result whose rower acceleration spans `[-2, 4]`.
pub fn sample_result() -> SimulationResult {
    SimulationResult {
        tt: vec![0.0, 0.25, 0.5, 0.75, 1.0],
        xx: vec![0.0, -0.1, -0.5, -0.9, -1.0],
        xx_dot: vec![0.0, -1.0, -2.0, -1.0, 0.0],
        xx_ddot: vec![-2.0, -1.0, 0.0, 2.0, 4.0],
        yy: vec![0.0, 2.5, 5.0, 7.5, 10.0],
        yy_dot: vec![10.0, 10.2, 10.4, 10.2, 10.0],
        yy_ddot: vec![0.5, 0.4, 0.0, -0.4, -0.5],
        magnitudes: Magnitudes {
            initial_energy: 5000.0,
            final_energy: 4990.5,
            system_energy_change: -9.5,
            rower_energy: 12.345,
            final_position: 10.0,
            final_velocity: 10.0,
            velocity_change: 0.0,
        },
        polynomial_latex: "x(t) = -2t^2 + ...".to_string(),
        coefficients: vec![0.0, 0.0, -1.0, 2.0],
    }
}
