//! Solver adapter backed by `good_lp` with the pure-Rust `microlp` backend.

use std::collections::{BTreeMap, HashMap};

use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel, Variable, constraint,
    default_solver, variable,
};

use crate::problem::{ConstraintOp, LinearExpr, LpProblem, Sense};
use crate::solution::{Solution, SolutionStatus, SolveError, Solver};

#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn to_expression(expr: &LinearExpr, columns: &HashMap<String, Variable>) -> Expression {
    let mut out = Expression::from(0);
    for term in &expr.terms {
        if let Some(var) = columns.get(&term.variable) {
            out += *var * term.coefficient;
        }
    }
    out
}

impl Solver for MicrolpSolver {
    fn solve(&self, problem: &LpProblem) -> Result<Solution, SolveError> {
        let mut vars = ProblemVariables::new();
        let mut columns: HashMap<String, Variable> = HashMap::new();
        let names = problem.variables();

        for name in &names {
            // LP format default: lower bound 0, no upper bound
            let bound = problem.bounds.iter().find(|b| &b.variable == name);
            let mut definition = variable().min(bound.map(|b| b.lower).unwrap_or(0.0));
            if let Some(upper) = bound.and_then(|b| b.upper) {
                definition = definition.max(upper);
            }
            if problem.is_integer(name) {
                definition = definition.integer();
            }
            columns.insert(name.clone(), vars.add(definition));
        }

        let objective = to_expression(&problem.objective.expr, &columns);
        let unsolved = match problem.objective.sense {
            Sense::Maximize => vars.maximise(objective),
            Sense::Minimize => vars.minimise(objective),
        };
        let mut model = unsolved.using(default_solver);

        for c in &problem.constraints {
            let lhs = to_expression(&c.expr, &columns);
            let built = match c.op {
                ConstraintOp::Le => constraint::leq(lhs, c.rhs),
                ConstraintOp::Ge => constraint::geq(lhs, c.rhs),
                ConstraintOp::Eq => constraint::eq(lhs, c.rhs),
            };
            model = model.with(built);
        }

        match model.solve() {
            Ok(solved) => {
                let values: BTreeMap<String, f64> = columns
                    .iter()
                    .map(|(name, var)| (name.clone(), solved.value(*var)))
                    .collect();
                Ok(Solution::optimal(values))
            }
            Err(ResolutionError::Infeasible) => Ok(Solution::with_status(SolutionStatus::Infeasible)),
            Err(ResolutionError::Unbounded) => Ok(Solution::with_status(SolutionStatus::Unbounded)),
            Err(other) => Err(SolveError::Backend(other.to_string())),
        }
    }
}
