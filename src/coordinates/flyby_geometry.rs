use crate::analysis::AnalysisErrors;
use nalgebra as na;

/// Per-sample flyby geometry, aligned index-for-index with the source record.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySeries {
    pub distance_above_surface: Vec<f64>, // meters, negative inside the body
    pub polar_angle: Vec<f64>,            // radians above the equatorial plane
}

/// Minimum-distance sample of a flyby
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestApproach {
    pub index: usize,
    pub distance_above_surface: f64,
    pub position: na::Vector3<f64>,
}

/// Distance above surface and polar angle of a body-frame position.
/// NaN components (missing data) propagate into both outputs.
pub fn body_frame_to_geometry(pos: &na::Vector3<f64>, body_radius: f64) -> (f64, f64) {
    let x = pos[0];
    let y = pos[1];
    let z = pos[2];

    let distance = pos.magnitude() - body_radius;

    // atan2 keeps the sign of z and is defined on the polar axis
    let p = (x * x + y * y).sqrt();
    let angle = z.atan2(p);

    (distance, angle)
}

pub struct GeometryReducer {
    body_radius: f64,
}

impl GeometryReducer {
    pub fn new(body_radius: f64) -> Result<Self, AnalysisErrors> {
        if !body_radius.is_finite() || body_radius <= 0.0 {
            return Err(AnalysisErrors::InvalidGeometry(format!(
                "body radius must be positive and finite, got {}",
                body_radius
            )));
        }
        Ok(Self { body_radius })
    }

    pub fn body_radius(&self) -> f64 {
        self.body_radius
    }

    /// Reduce body-frame positions (m) to distance/angle pairs.
    ///
    /// Missing components are expected to arrive as NaN and come out as NaN.
    /// Infinite components can only come from a caller bug and are rejected.
    pub fn reduce(&self, positions: &[na::Vector3<f64>]) -> Result<GeometrySeries, AnalysisErrors> {
        let mut distance_above_surface = Vec::with_capacity(positions.len());
        let mut polar_angle = Vec::with_capacity(positions.len());

        for (index, pos) in positions.iter().enumerate() {
            if pos.iter().any(|c| c.is_infinite()) {
                return Err(AnalysisErrors::InvalidGeometry(format!(
                    "sample {} has an infinite position component",
                    index
                )));
            }
            let (distance, angle) = body_frame_to_geometry(pos, self.body_radius);
            distance_above_surface.push(distance);
            polar_angle.push(angle);
        }

        Ok(GeometrySeries {
            distance_above_surface,
            polar_angle,
        })
    }
}

impl GeometrySeries {
    pub fn len(&self) -> usize {
        self.distance_above_surface.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance_above_surface.is_empty()
    }

    /// Closest sample, ignoring samples without a distance.
    pub fn closest_approach(&self, positions: &[na::Vector3<f64>]) -> Option<ClosestApproach> {
        self.distance_above_surface
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_nan())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .and_then(|(index, &distance)| {
                positions.get(index).map(|&position| ClosestApproach {
                    index,
                    distance_above_surface: distance,
                    position,
                })
            })
    }

    /// Indices of samples reported inside the body.
    pub fn below_surface(&self) -> Vec<usize> {
        self.distance_above_surface
            .iter()
            .enumerate()
            .filter(|(_, &d)| d < 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}
