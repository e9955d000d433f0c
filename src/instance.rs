//! Random benchmark instances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::CostMatrix;
use crate::error::{Error, Result};

/// Generates an n×n matrix of integral costs drawn uniformly from `1..=max_cost`.
///
/// The same seed always yields the same matrix. With `symmetric`, entry
/// `(j, i)` mirrors `(i, j)`.
///
/// # Examples
///
/// ```
/// use tsp_exact::instance::random_matrix;
///
/// let a = random_matrix(5, 100, true, 7).expect("valid");
/// let b = random_matrix(5, 100, true, 7).expect("valid");
/// assert_eq!(a, b);
/// assert!(a.is_symmetric(0.0));
/// ```
pub fn random_matrix(n: usize, max_cost: u32, symmetric: bool, seed: u64) -> Result<CostMatrix> {
    if max_cost == 0 {
        return Err(Error::invalid_input("max cost must be at least 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0.0; n * n];

    for i in 0..n {
        for j in 0..n {
            if i == j || (symmetric && j < i) {
                continue;
            }
            let cost = rng.random_range(1..=max_cost) as f64;
            data[i * n + j] = cost;
            if symmetric {
                data[j * n + i] = cost;
            }
        }
    }

    CostMatrix::from_data(n, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_in_range() {
        let m = random_matrix(6, 10, false, 1).expect("valid");
        for i in 0..6 {
            assert_eq!(m.get(i, i), 0.0);
            for j in (0..6).filter(|&j| j != i) {
                let c = m.get(i, j);
                assert!((1.0..=10.0).contains(&c));
                assert_eq!(c, c.round());
            }
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = random_matrix(8, 1000, false, 1).expect("valid");
        let b = random_matrix(8, 1000, false, 2).expect("valid");
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(random_matrix(4, 0, false, 0).is_err());
        assert!(random_matrix(1, 10, false, 0).is_err());
    }
}
