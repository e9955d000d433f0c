//! Dense arc-cost matrix.

use crate::error::{Error, Result};

/// A dense n×n arc-cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling along arc `i → j`. The matrix may
/// be asymmetric. Diagonal entries are stored but never read by any
/// formulation, since no formulation has a variable for `i → i`.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0],
///     vec![1.0, 0.0, 9.0],
///     vec![9.0, 9.0, 0.0],
/// ])
/// .expect("square matrix");
/// assert_eq!(costs.size(), 3);
/// assert_eq!(costs.get(0, 2), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix from an explicit row-major grid of `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Fails if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a matrix where every off-diagonal arc costs `cost`.
    pub fn uniform(size: usize, cost: f64) -> Result<Self> {
        let mut data = vec![cost; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self::from_data(size, data)
    }

    fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(Error::invalid_input(format!(
                "a tour needs at least 2 nodes, got {}",
                self.size
            )));
        }
        for i in 0..self.size {
            for j in 0..self.size {
                let c = self.get(i, j);
                if !c.is_finite() || c < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "cost ({i}, {j}) = {c} is not a finite non-negative number"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the cost of arc `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Iterates over all ordered pairs `(i, j)` with `i != j`, row by row.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
    }
}
