//! Synthetic workload generation
//!
//! A workload is a fixed-size, ordered list of disk requests. The position of a
//! request in the list is its identity: policies refer to requests by index and
//! response times are recorded per index.
//!
//! Every field of a request is drawn independently and uniformly from its
//! range, using the random source handed in by the caller. Passing a seeded RNG
//! makes the workload reproducible.
//!
//! # Example
//!
//! ```
//! use disksim::disk::GeometryConfig;
//! use disksim::workload::Workload;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let workload = Workload::generate(&GeometryConfig::default(), &mut rng);
//! assert_eq!(workload.len(), 1000);
//! ```

use crate::disk::GeometryConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One disk request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Platter index, in [0, platters). Carried but not used by the cost model.
    pub platter: u32,
    /// Cylinder index, in [0, cylinders)
    pub cylinder: u32,
    /// Starting sector, in [0, sectors_per_track)
    pub sector: u32,
    /// Number of contiguous sectors, in [1, sectors_per_track]
    pub length: u32,
}

impl Request {
    /// Draw a random request for the given drive shape
    pub fn random<R: Rng + ?Sized>(geometry: &GeometryConfig, rng: &mut R) -> Self {
        Self {
            platter: rng.gen_range(0..geometry.platters),
            cylinder: rng.gen_range(0..geometry.cylinders),
            sector: rng.gen_range(0..geometry.sectors_per_track),
            length: rng.gen_range(1..=geometry.sectors_per_track),
        }
    }
}

/// Immutable, indexed collection of requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    requests: Vec<Request>,
}

impl Workload {
    /// Generate `geometry.requests` random requests
    pub fn generate<R: Rng + ?Sized>(geometry: &GeometryConfig, rng: &mut R) -> Self {
        let requests = (0..geometry.requests)
            .map(|_| Request::random(geometry, rng))
            .collect();
        Self { requests }
    }

    /// Build a workload from explicit requests (arrival order = slice order)
    pub fn from_requests(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.requests.iter()
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}

impl Index<usize> for Workload {
    type Output = Request;

    fn index(&self, index: usize) -> &Request {
        &self.requests[index]
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Request;
    type IntoIter = std::slice::Iter<'a, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_generate_exact_count() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let config = GeometryConfig {
            requests: 37,
            ..GeometryConfig::default()
        };
        let workload = Workload::generate(&config, &mut rng);
        assert_eq!(workload.len(), 37);
    }

    #[test]
    fn test_fields_within_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let config = GeometryConfig::default();
        let workload = Workload::generate(&config, &mut rng);

        for request in &workload {
            assert!(request.platter < config.platters);
            assert!(request.cylinder < config.cylinders);
            assert!(request.sector < config.sectors_per_track);
            assert!(request.length >= 1 && request.length <= config.sectors_per_track);
        }
    }

    #[test]
    fn test_generate_seeded() {
        let config = GeometryConfig::default();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        // Same seed should produce same workload
        assert_eq!(
            Workload::generate(&config, &mut rng1),
            Workload::generate(&config, &mut rng2)
        );
    }

    #[test]
    fn test_generate_covers_ranges() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let config = GeometryConfig::default();
        let workload = Workload::generate(&config, &mut rng);

        // 1000 uniform draws over 25 cylinders should hit both ends
        assert!(workload.iter().any(|r| r.cylinder == 0));
        assert!(workload.iter().any(|r| r.cylinder == config.cylinders - 1));
        assert!(workload.iter().any(|r| r.length == config.sectors_per_track));
        assert!(workload.iter().any(|r| r.length == 1));
    }

    #[test]
    fn test_from_requests_preserves_order() {
        let requests = vec![
            Request { platter: 0, cylinder: 3, sector: 1, length: 1 },
            Request { platter: 1, cylinder: 1, sector: 2, length: 2 },
        ];
        let workload = Workload::from_requests(requests.clone());
        assert_eq!(workload.requests(), requests.as_slice());
        assert_eq!(workload[1].cylinder, 1);
    }
}
