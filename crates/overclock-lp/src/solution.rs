use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::problem::LpProblem;

/// The result reported by an external solver
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution status
    pub status: SolutionStatus,
    /// Primal value for each column, including the synthetic `power` column
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: BTreeMap<String, f64>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// An optimal solution was found
    Optimal,
    /// The problem is infeasible (no solution exists)
    Infeasible,
    /// The problem is unbounded
    Unbounded,
    /// Solver encountered an error
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Error => write!(f, "Error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Failed to solve LP: {0}")]
    NotOptimal(SolutionStatus),
    #[error("Solver backend error: {0}")]
    Backend(String),
}

/// An external LP solver. Implementations receive the whole model and return
/// either a completed solution or an error; there are no partial results.
pub trait Solver {
    fn solve(&self, problem: &LpProblem) -> Result<Solution, SolveError>;
}

impl Solution {
    pub fn optimal(values: BTreeMap<String, f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            values,
        }
    }

    pub fn with_status(status: SolutionStatus) -> Self {
        Self {
            status,
            values: BTreeMap::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Only an optimal solution is usable; anything else is a hard failure
    pub fn into_optimal(self) -> Result<Self, SolveError> {
        if self.is_optimal() {
            Ok(self)
        } else {
            Err(SolveError::NotOptimal(self.status))
        }
    }

    pub fn value(&self, variable: &str) -> Option<f64> {
        self.values.get(variable).copied()
    }
}
