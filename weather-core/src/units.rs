//! Unit conversions for values reported by OpenWeather in SI units.

const KELVIN_OFFSET: f64 = 273.15;
const MPS_TO_KMH: f64 = 3.6;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * MPS_TO_KMH
}
