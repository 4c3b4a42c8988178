//! Structuring elements for dilation
//!
//! A structuring element is a centered boolean mask; dilation takes the
//! maximum over the cells it marks.

use dipkit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shape of a structuring element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuringElement {
    /// Cells with `|dr| + |dc| ≤ radius`
    Diamond(usize),
    /// Horizontal and vertical arms of the given radius
    Cross(usize),
    /// Full square, side `2·radius + 1`
    Square(usize),
    /// User-provided mask (odd-sized, square, at least one active cell)
    Custom(Vec<Vec<bool>>),
}

impl Default for StructuringElement {
    /// The 5×5 element
    ///
    /// ```text
    /// . . # . .
    /// . # # # .
    /// # # # # #
    /// . # # # .
    /// . . # . .
    /// ```
    fn default() -> Self {
        StructuringElement::Diamond(2)
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Diamond(r)
            | StructuringElement::Cross(r)
            | StructuringElement::Square(r) => {
                if *r == 0 {
                    return Err(Error::InvalidParameter {
                        name: "radius",
                        value: "0".to_string(),
                        reason: "structuring element radius must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
            StructuringElement::Custom(mask) => {
                let size = mask.len();
                if size % 2 == 0 {
                    return Err(Error::InvalidParameter {
                        name: "custom_mask",
                        value: format!("{}x{}", size, size),
                        reason: "custom mask size must be odd".to_string(),
                    });
                }
                if let Some(row) = mask.iter().find(|row| row.len() != size) {
                    return Err(Error::InvalidParameter {
                        name: "custom_mask",
                        value: format!("row length {}", row.len()),
                        reason: format!("custom mask must be square (expected {})", size),
                    });
                }
                if !mask.iter().flatten().any(|&active| active) {
                    return Err(Error::InvalidParameter {
                        name: "custom_mask",
                        value: "no active cells".to_string(),
                        reason: "custom mask must mark at least one cell".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Half-extent of the mask; also the width of the unprocessed border band
    pub fn radius(&self) -> usize {
        match self {
            StructuringElement::Diamond(r)
            | StructuringElement::Cross(r)
            | StructuringElement::Square(r) => *r,
            StructuringElement::Custom(mask) => mask.len() / 2,
        }
    }

    /// Whether the cell at offset (dr, dc) from the center is active
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        let r = self.radius() as isize;
        if dr.abs() > r || dc.abs() > r {
            return false;
        }
        match self {
            StructuringElement::Diamond(_) => dr.abs() + dc.abs() <= r,
            StructuringElement::Cross(_) => dr == 0 || dc == 0,
            StructuringElement::Square(_) => true,
            StructuringElement::Custom(mask) => mask[(dr + r) as usize][(dc + r) as usize],
        }
    }

    /// (dr, dc) offsets of all active cells, row-major
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        (-r..=r)
            .flat_map(|dr| (-r..=r).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| self.contains(dr, dc))
            .collect()
    }

    /// Dense `(2r+1)²` boolean mask
    pub fn mask(&self) -> Vec<Vec<bool>> {
        let r = self.radius() as isize;
        (-r..=r)
            .map(|dr| (-r..=r).map(|dc| self.contains(dr, dc)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fixed_five_by_five() {
        let se = StructuringElement::default();
        assert_eq!(se.radius(), 2);
        let expected = vec![
            vec![false, false, true, false, false],
            vec![false, true, true, true, false],
            vec![true, true, true, true, true],
            vec![false, true, true, true, false],
            vec![false, false, true, false, false],
        ];
        assert_eq!(se.mask(), expected);
        assert_eq!(se.offsets().len(), 13);
    }

    #[test]
    fn test_square_offsets() {
        let offsets = StructuringElement::Square(1).offsets();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_cross_offsets() {
        let offsets = StructuringElement::Cross(2).offsets();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(0, -2)));
        assert!(offsets.contains(&(2, 0)));
        assert!(!offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_custom_round_trips_through_mask() {
        let mask = vec![
            vec![true, false, false],
            vec![true, false, false],
            vec![true, true, true],
        ];
        let se = StructuringElement::Custom(mask.clone());
        assert!(se.validate().is_ok());
        assert_eq!(se.mask(), mask);
        assert_eq!(se.offsets().len(), 5);
        assert!(se.contains(1, 1));
        assert!(!se.contains(-1, 1));
    }

    #[test]
    fn test_validate_rejects_bad_elements() {
        assert!(StructuringElement::Diamond(0).validate().is_err());
        assert!(StructuringElement::Custom(vec![]).validate().is_err());
        assert!(StructuringElement::Custom(vec![vec![true, false], vec![false, true]])
            .validate()
            .is_err());
        assert!(StructuringElement::Custom(vec![vec![true, false, true]])
            .validate()
            .is_err());
        assert!(StructuringElement::Custom(vec![vec![false]]).validate().is_err());
    }
}
