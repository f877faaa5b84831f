//! Vehicle state and simple throttle physics.
//!
//! This module models the values fed to the dashboard. Each tick either
//! accelerates (throttle held) or coasts, with all values clamped to
//! their physical ranges.

use crate::config::simulation::*;
use crate::config::{SPEEDOMETER, TACHOMETER};

/// Current state of the vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    /// Road speed in km/h (0-200).
    pub speed: f32,
    /// Engine speed in RPM (0-8000).
    pub rpm: f32,
    /// Coolant temperature in Celsius (50-100 once warm).
    pub temperature: f32,
    /// Fuel level percentage (0-100).
    pub fuel: f32,
    /// Selected gear.
    pub gear: u8,
    /// Whether the throttle is held this tick.
    pub accelerating: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            speed: 0.0,
            rpm: 0.0,
            temperature: IDLE_TEMP,
            fuel: 100.0,
            gear: 1,
            accelerating: false,
        }
    }
}

impl VehicleState {
    /// Advance the simulation by one tick.
    ///
    /// Throttle held: speed, RPM and temperature climb, fuel burns.
    /// Coasting: speed and RPM bleed off, temperature settles toward idle.
    pub fn step(&mut self) {
        if self.accelerating {
            self.speed = (self.speed + ACCEL_SPEED_DELTA).min(MAX_SPEED);
            self.rpm = (self.rpm + ACCEL_RPM_DELTA).min(MAX_RPM);
            self.temperature = (self.temperature + ACCEL_TEMP_DELTA).min(MAX_TEMP);
            self.fuel = (self.fuel - FUEL_BURN_DELTA).max(0.0);
        } else {
            self.speed = (self.speed - COAST_SPEED_DELTA).max(0.0);
            self.rpm = (self.rpm - COAST_RPM_DELTA).max(0.0);
            self.temperature = (self.temperature - COAST_TEMP_DELTA).max(IDLE_TEMP);
        }
    }

    /// Whether the warning dots should light up.
    ///
    /// Triggers at the dial danger thresholds (80% of full scale).
    pub fn warning_active(&self) -> bool {
        self.speed >= SPEEDOMETER.danger_threshold || self.rpm >= TACHOMETER.danger_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = VehicleState::default();
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.rpm, 0.0);
        assert_eq!(state.temperature, IDLE_TEMP);
        assert_eq!(state.fuel, 100.0);
        assert_eq!(state.gear, 1);
        assert!(!state.accelerating);
    }

    #[test]
    fn test_accelerate_one_tick() {
        let mut state = VehicleState {
            accelerating: true,
            ..Default::default()
        };
        state.step();
        assert_eq!(state.speed, 2.0);
        assert_eq!(state.rpm, 200.0);
        assert_eq!(state.temperature, 50.5);
        assert_eq!(state.fuel, 99.9);
    }

    #[test]
    fn test_speed_and_rpm_are_capped() {
        let mut state = VehicleState {
            speed: 199.5,
            rpm: 7950.0,
            accelerating: true,
            ..Default::default()
        };
        state.step();
        assert_eq!(state.speed, MAX_SPEED);
        assert_eq!(state.rpm, MAX_RPM);
    }

    #[test]
    fn test_coasting_floors() {
        let mut state = VehicleState {
            speed: 0.5,
            rpm: 50.0,
            temperature: 50.1,
            ..Default::default()
        };
        state.step();
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.rpm, 0.0);
        assert_eq!(state.temperature, IDLE_TEMP);
    }

    #[test]
    fn test_fuel_never_negative() {
        let mut state = VehicleState {
            fuel: 0.05,
            accelerating: true,
            ..Default::default()
        };
        state.step();
        state.step();
        assert_eq!(state.fuel, 0.0);
    }

    #[test]
    fn test_warning_thresholds() {
        let mut state = VehicleState::default();
        assert!(!state.warning_active());

        state.speed = 160.0;
        assert!(state.warning_active());

        state.speed = 0.0;
        state.rpm = 6400.0;
        assert!(state.warning_active());

        state.rpm = 6399.0;
        assert!(!state.warning_active());
    }

    #[test]
    fn test_coast_to_standstill() {
        let mut state = VehicleState {
            speed: 10.0,
            rpm: 1000.0,
            ..Default::default()
        };
        for _ in 0..20 {
            state.step();
        }
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.rpm, 0.0);
    }
}
