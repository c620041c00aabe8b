use std::collections::HashSet;

use crate::catalog::Instrument;

/// Buy instruments off the shelf in catalog order while the budget lasts.
///
/// An instrument is bought when its price is strictly below the remaining
/// budget. The first one that is not affordable ends the walk, so the result
/// is always a prefix of `catalog` and cheaper instruments further down the
/// shelf are never considered.
pub fn allocate(catalog: &[Instrument], budget: f64) -> &[Instrument] {
    let mut remaining = budget;
    let mut bought = 0;
    for instrument in catalog {
        let price = f64::from(instrument.price);
        if price < remaining {
            remaining -= price;
            bought += 1;
        } else {
            break;
        }
    }
    &catalog[..bought]
}

/// The instruments assigned to one station, fixed after allocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    /// Catalog indices in catalog order
    indices: Vec<usize>,
    members: HashSet<usize>,
}

impl Assignment {
    pub fn new(instruments: &[Instrument]) -> Self {
        let indices: Vec<usize> = instruments.iter().map(|i| i.index).collect();
        let members = indices.iter().copied().collect();
        Self { indices, members }
    }

    /// Allocate `catalog` against `budget` and record the result
    pub fn purchase(catalog: &[Instrument], budget: f64) -> Self {
        Self::new(allocate(catalog, budget))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
