//! Regular lattice of word-circle centres.

use num_complex::Complex64;

/// An `nx × ny` lattice of glyph cells.
///
/// Each cell is `radius + 2·padding` wide and tall; rows are sentences and
/// columns are word positions within a sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub radius: f64,
    pub padding: f64,
}

impl Grid {
    /// Padding defaults to half the radius when `None`.
    pub fn new(nx: usize, ny: usize, radius: f64, padding: Option<f64>) -> Self {
        Self {
            nx,
            ny,
            radius,
            padding: padding.unwrap_or(0.5 * radius),
        }
    }

    /// Side of one cell.
    pub fn units(&self) -> f64 {
        self.radius + 2.0 * self.padding
    }

    pub fn width(&self) -> f64 {
        self.nx as f64 * self.units()
    }

    pub fn height(&self) -> f64 {
        self.ny as f64 * self.units()
    }

    /// Cell centres, `ny` rows of `nx`, row-major.
    pub fn centers(&self) -> Vec<Vec<Complex64>> {
        let units = self.units();
        (0..self.ny)
            .map(|row| {
                (0..self.nx)
                    .map(|col| Complex64::new(col as f64 + 0.5, row as f64 + 0.5) * units)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_two_lattice() {
        let (r, p) = (10.0, 4.0);
        let grid = Grid::new(3, 2, r, Some(p));
        let units = r + 2.0 * p;

        assert_eq!(grid.units(), units);
        assert_eq!(grid.width(), 3.0 * units);
        assert_eq!(grid.height(), 2.0 * units);

        let centers = grid.centers();
        assert_eq!(centers.len(), 2);
        assert!(centers.iter().all(|row| row.len() == 3));
        assert_eq!(centers[0][0], Complex64::new(units / 2.0, units / 2.0));

        for (row, cells) in centers.iter().enumerate() {
            for (col, c) in cells.iter().enumerate() {
                let expected = Complex64::new((col as f64 + 0.5) * units, (row as f64 + 0.5) * units);
                assert!((c - expected).norm() < 1e-12);
            }
        }
        assert!(((centers[1][2] - centers[1][1]).re - units).abs() < 1e-12);
        assert!(((centers[1][2] - centers[0][2]).im - units).abs() < 1e-12);
    }

    #[test]
    fn padding_defaults_to_half_radius() {
        let grid = Grid::new(1, 1, 8.0, None);
        assert_eq!(grid.padding, 4.0);
        assert_eq!(grid.units(), 16.0);
    }
}
