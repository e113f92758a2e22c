mod format;
mod problem;
mod solution;

#[cfg(feature = "microlp")]
mod microlp;

pub use format::{DECIMALS, format_number};
pub use problem::{Bound, Constraint, ConstraintOp, LinearExpr, LpProblem, Objective, Sense, Term};
pub use solution::{Solution, SolutionStatus, SolveError, Solver};

#[cfg(feature = "microlp")]
pub use microlp::MicrolpSolver;
