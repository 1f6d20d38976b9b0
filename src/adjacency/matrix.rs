//! Dense symmetric adjacency matrix.

use serde::{Deserialize, Serialize};

/// A dense n×n boolean adjacency matrix stored in row-major order.
///
/// Row and column `i` correspond to the town with index `i`. Roads are
/// undirected, so entries are kept symmetric by [`connect`](Self::connect).
/// The diagonal is never set: a town is not connected to itself.
///
/// # Examples
///
/// ```
/// use u_charging::adjacency::AdjacencyMatrix;
///
/// let mut m = AdjacencyMatrix::new(3);
/// m.connect(0, 1);
/// assert!(m.is_connected(0, 1));
/// assert!(m.is_connected(1, 0));
/// assert_eq!(m.degree_of(1), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    data: Vec<bool>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates an adjacency matrix of the given size with no connections.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![false; size * size],
            size,
        }
    }

    /// Extends the matrix by one row and one column of unset entries.
    ///
    /// All prior entries keep their values.
    pub fn grow(&mut self) {
        let old = self.size;
        let new = old + 1;
        let mut data = vec![false; new * new];
        for i in 0..old {
            data[i * new..i * new + old].copy_from_slice(&self.data[i * old..(i + 1) * old]);
        }
        self.data = data;
        self.size = new;
    }

    /// Marks towns `a` and `b` as connected, in both directions.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn connect(&mut self, a: usize, b: usize) {
        self.data[a * self.size + b] = true;
        self.data[b * self.size + a] = true;
    }

    /// Returns `true` if towns `a` and `b` are directly connected.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        self.data[a * self.size + b]
    }

    /// Number of towns this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of towns directly connected to `of`.
    pub fn degree_of(&self, of: usize) -> usize {
        (0..self.size).filter(|&j| self.is_connected(of, j)).count()
    }

    /// Iterates over the indices of towns directly connected to `of`.
    pub fn neighbors(&self, of: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&j| self.is_connected(of, j))
    }

    /// Returns `true` if every entry mirrors its transpose.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.is_connected(i, j) != self.is_connected(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
