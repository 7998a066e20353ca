//! Two-dimensional index arrays and point-array validation.
//!
//! `IndexArray` is the bulk-transfer form of a canvas: one palette index per
//! pixel, addressed `[x][y]`, with `shape() == (width, height)`.

use crate::basics::Point;
use crate::error::{DrawError, Result};

// ============================================================================
// IndexArray
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexArray {
    width: usize,
    height: usize,
    // x-major: data[x * height + y]
    data: Vec<u8>,
}

impl IndexArray {
    /// A zero-filled array.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap x-major data (`data[x * height + y]`).
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(DrawError::Shape {
                expected: format!("{} values for ({width}, {height})", width * height),
                got: format!("{} values", data.len()),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from nested rows where the outer index is `x`.
    ///
    /// Every inner row must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.len();
        let height = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != height {
                return Err(DrawError::Shape {
                    expected: format!("row {x} of length {height}"),
                    got: format!("length {}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[x * self.height + y])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            self.data[x * self.height + y] = value;
        }
    }

    /// Nested rows, outer index `x`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.height == 0 {
            return vec![Vec::new(); self.width];
        }
        self.data.chunks(self.height).map(|c| c.to_vec()).collect()
    }

    /// Raw x-major data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

// ============================================================================
// Point arrays
// ============================================================================

/// Convert rows of coordinates into points, requiring shape `(N, 2)`.
///
/// Fails before producing anything if any row does not have exactly two
/// values.
pub fn points_from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Vec<Point>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [x, y] => Ok(Point::new(*x, *y)),
            other => Err(DrawError::Shape {
                expected: "(N, 2) point array".to_string(),
                got: format!("row {i} with {} values", other.len()),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_indexing() {
        let a = IndexArray::from_rows(&[[0u8, 1, 2], [3, 4, 5], [6, 7, 8], [9, 10, 11]]).unwrap();
        assert_eq!(a.shape(), (4, 3));
        assert_eq!(a.get(0, 2), Some(2));
        assert_eq!(a.get(3, 0), Some(9));
        assert_eq!(a.get(4, 0), None);
        assert_eq!(a.to_rows()[1], vec![3, 4, 5]);
    }

    #[test]
    fn test_ragged_rows_fail() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 1], vec![2]];
        assert!(matches!(
            IndexArray::from_rows(&rows),
            Err(DrawError::Shape { .. })
        ));
    }

    #[test]
    fn test_from_vec_len() {
        assert!(IndexArray::from_vec(2, 3, vec![0; 6]).is_ok());
        assert!(IndexArray::from_vec(2, 3, vec![0; 5]).is_err());
    }

    #[test]
    fn test_points_from_rows() {
        let pts = points_from_rows(&[[1i64, 2], [3, 4], [5, 6]]).unwrap();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]);

        let bad = points_from_rows(&[vec![1i64, 2, 3], vec![3, 4, 5]]);
        assert!(matches!(bad, Err(DrawError::Shape { .. })));

        let flat = points_from_rows(&[vec![1i64, 2, 3, 3, 4, 5, 5, 6, 7]]);
        assert!(flat.is_err());
    }
}
