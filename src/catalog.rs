//! Selectable algorithms and grid sizes offered by the pickers.

use crate::algorithms::AlgorithmKind;
use crate::constants::DEFAULT_MAZE_SIZES;
use serde::{Deserialize, Serialize};

/// Immutable catalog entry. `maskable` gates whether masking UI is offered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Algorithm {
    pub name: String,
    pub kind: AlgorithmKind,
    pub maskable: bool,
}

impl Algorithm {
    pub fn from_kind(kind: AlgorithmKind) -> Self {
        Self {
            name: kind.display_name().to_string(),
            kind,
            maskable: kind.is_maskable(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    sizes: Vec<usize>,
    algorithms: Vec<Algorithm>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_sizes(DEFAULT_MAZE_SIZES.to_vec())
    }
}

impl Catalog {
    /// Catalog with every built-in algorithm and the given sizes
    pub fn with_sizes(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            algorithms: AlgorithmKind::ALL.into_iter().map(Algorithm::from_kind).collect(),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn algorithm_by_name(&self, name: &str) -> Option<&Algorithm> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    /// Picker label for a size, e.g. `10x10`
    pub fn size_label(size: usize) -> String {
        format!("{size}x{size}")
    }
}
