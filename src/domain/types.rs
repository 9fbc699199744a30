use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Pickup,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One geocoded stop of a trip. `(0, 0)` means geocoding never succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub kind: PointKind,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub address: String,
}

impl Point {
    pub fn new(id: impl Into<String>, kind: PointKind, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            latitude: Some(latitude),
            longitude: Some(longitude),
            label: String::new(),
            address: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Coordinates usable for optimization: present, finite and not the sentinel.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let (lat, lng) = (self.latitude?, self.longitude?);
        if !lat.is_finite() || !lng.is_finite() || (lat == 0.0 && lng == 0.0) {
            return None;
        }
        Some(Coordinates { lat, lng })
    }

    pub fn is_valid(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Name shown to the user when this stop needs attention.
    pub fn display_name(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Visiting order as a permutation of indices into a point slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour(Vec<usize>);

impl Tour {
    pub fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// The caller's original order.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// True when every index in `0..n` appears exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &idx in &self.0 {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub usable: bool,
    pub invalid_count: usize,
    pub summary: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteStatistics {
    pub total_distance_km: f64,
    pub estimated_minutes: u32,
    pub stop_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub distance_saved_km: f64,
    pub percent_saved: f64,
    pub minutes_saved: u32,
}

/// Result of one optimization request.
///
/// `tour` indexes the valid subset of the caller's points; `original_indices`
/// maps each position of that subset back to the caller's PointSet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub tour: Tour,
    pub original_indices: Vec<usize>,
    pub statistics: RouteStatistics,
}

impl RoutePlan {
    /// The optimized order expressed as indices into the caller's PointSet.
    pub fn ordered_original_indices(&self) -> Vec<usize> {
        self.tour
            .as_slice()
            .iter()
            .map(|&idx| self.original_indices[idx])
            .collect()
    }
}

/// Plan plus the comparison against the caller's order, as shown in the trip view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    pub plan: RoutePlan,
    pub baseline: RouteStatistics,
    pub savings: SavingsReport,
}
