/// A single `coefficient × variable` term
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub variable: String,
    pub coefficient: f64,
}

/// Sparse linear expression. Terms keep insertion order so the emitted LP text is stable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    pub terms: Vec<Term>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coefficient × variable`, merging with an existing term on the same variable
    pub fn add(&mut self, variable: impl Into<String>, coefficient: f64) {
        let variable = variable.into();
        match self.terms.iter_mut().find(|t| t.variable == variable) {
            Some(term) => term.coefficient += coefficient,
            None => self.terms.push(Term { variable, coefficient }),
        }
    }

    pub fn with(mut self, variable: impl Into<String>, coefficient: f64) -> Self {
        self.add(variable, coefficient);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Coefficient of a variable, 0 when absent
    pub fn coefficient(&self, variable: &str) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.variable == variable)
            .map(|t| t.coefficient)
            .sum()
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.variable.as_str())
    }

    /// Evaluate against solved column values; missing columns count as 0
    pub fn evaluate(&self, value_of: impl Fn(&str) -> Option<f64>) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * value_of(&t.variable).unwrap_or(0.0))
            .sum()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    /// Label written before the objective expression
    pub name: String,
    pub sense: Sense,
    pub expr: LinearExpr,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Name/label for the constraint (for diagnostics)
    pub name: String,
    pub expr: LinearExpr,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl ConstraintOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::Le => "<=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Eq => "=",
        }
    }
}

/// Variable bound `lower <= variable (<= upper)`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub variable: String,
    pub lower: f64,
    pub upper: Option<f64>,
}

/// Represents a linear programming problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
    pub bounds: Vec<Bound>,
    /// Variables that must take integer values
    pub integers: Vec<String>,
}

impl LpProblem {
    pub fn new(name: impl Into<String>, sense: Sense) -> Self {
        Self {
            objective: Objective {
                name: name.into(),
                sense,
                expr: LinearExpr::new(),
            },
            constraints: Vec::new(),
            bounds: Vec::new(),
            integers: Vec::new(),
        }
    }

    pub fn set_objective(&mut self, expr: LinearExpr) {
        self.objective.expr = expr;
    }

    pub fn add_constraint(&mut self, name: impl Into<String>, expr: LinearExpr, op: ConstraintOp, rhs: f64) {
        self.constraints.push(Constraint {
            name: name.into(),
            expr,
            op,
            rhs,
        });
    }

    pub fn add_lower_bound(&mut self, variable: impl Into<String>, lower: f64) {
        self.bounds.push(Bound {
            variable: variable.into(),
            lower,
            upper: None,
        });
    }

    pub fn mark_integer(&mut self, variable: impl Into<String>) {
        let variable = variable.into();
        if !self.integers.contains(&variable) {
            self.integers.push(variable);
        }
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    pub fn is_integer(&self, variable: &str) -> bool {
        self.integers.iter().any(|v| v == variable)
    }

    /// Every variable mentioned anywhere in the problem, in first-seen order
    pub fn variables(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        let exprs = std::iter::once(&self.objective.expr).chain(self.constraints.iter().map(|c| &c.expr));
        let names = exprs
            .flat_map(|e| e.variables())
            .chain(self.bounds.iter().map(|b| b.variable.as_str()))
            .chain(self.integers.iter().map(String::as_str));
        for name in names {
            if seen.insert(name) {
                out.push(name.to_string());
            }
        }
        out
    }

    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}
