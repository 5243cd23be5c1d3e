//! Straight-line travel estimates between two catalog entries.
//!
//! This deliberately stays offline: great-circle distance with fixed average
//! speeds, good enough for "roughly how far is it" in the sidebar. Real
//! routing belongs to the map collaborator.

use crate::types::{Coordinates, TravelEstimate};

const EARTH_RADIUS_KM: f64 = 6371.0;
const WALKING_KMH: f64 = 4.8;
const DRIVING_KMH: f64 = 30.0;

/// Haversine great-circle distance in kilometres.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

impl TravelEstimate {
    /// Estimate walking and city-driving time between two points. Minutes are
    /// rounded up so very short hops never show as zero.
    pub fn between(from: Coordinates, to: Coordinates) -> TravelEstimate {
        let distance = distance_km(from, to);
        TravelEstimate {
            distance_km: distance,
            walking_minutes: minutes_at(distance, WALKING_KMH),
            driving_minutes: minutes_at(distance, DRIVING_KMH),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn minutes_at(distance_km: f64, speed_kmh: f64) -> u32 {
    (distance_km / speed_kmh * 60.0).ceil() as u32
}
