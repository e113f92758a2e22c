//! Plaintext LP serialization.
//!
//! Sections are written in a fixed order: `Maximize`/`Minimize`, `Subject To`,
//! `Bounds`, `General`, `End`. Every number is rendered with four decimal places.

use std::fmt::{self, Write};

use crate::problem::{LinearExpr, LpProblem, Sense};

/// Decimal places used for every coefficient, right-hand side and bound
pub const DECIMALS: usize = 4;

/// Render a number with fixed precision, never producing `-0.0000`
pub fn format_number(value: f64) -> String {
    let text = format!("{:.*}", DECIMALS, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

fn renders_as_zero(value: f64) -> bool {
    format_number(value.abs()).chars().all(|c| c == '0' || c == '.')
}

/// Write an expression as `a x + b y - c z`. Returns false if nothing was written.
fn write_expr(out: &mut impl Write, expr: &LinearExpr) -> Result<bool, fmt::Error> {
    let mut first = true;
    for term in &expr.terms {
        if renders_as_zero(term.coefficient) {
            continue;
        }
        let magnitude = format_number(term.coefficient.abs());
        match (first, term.coefficient < 0.0) {
            (true, false) => write!(out, "{} {}", magnitude, term.variable)?,
            (true, true) => write!(out, "- {} {}", magnitude, term.variable)?,
            (false, false) => write!(out, " + {} {}", magnitude, term.variable)?,
            (false, true) => write!(out, " - {} {}", magnitude, term.variable)?,
        }
        first = false;
    }
    Ok(!first)
}

impl fmt::Display for LpProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.objective.sense {
            Sense::Maximize => writeln!(f, "Maximize")?,
            Sense::Minimize => writeln!(f, "Minimize")?,
        }
        write!(f, " {}: ", self.objective.name)?;
        if !write_expr(f, &self.objective.expr)? {
            // Keep the objective line parseable when no recipe touches the targets
            let placeholder = self
                .bounds
                .first()
                .map(|b| b.variable.as_str())
                .unwrap_or("power");
            write!(f, "{} {}", format_number(0.0), placeholder)?;
        }
        writeln!(f)?;

        writeln!(f, "Subject To")?;
        for c in &self.constraints {
            write!(f, " {}: ", c.name)?;
            if !write_expr(f, &c.expr)? {
                write!(f, "{} {}", format_number(0.0), c.expr.variables().next().unwrap_or("power"))?;
            }
            writeln!(f, " {} {}", c.op.symbol(), format_number(c.rhs))?;
        }

        writeln!(f, "Bounds")?;
        for b in &self.bounds {
            match b.upper {
                Some(upper) => writeln!(
                    f,
                    " {} <= {} <= {}",
                    format_number(b.lower),
                    b.variable,
                    format_number(upper)
                )?,
                None => writeln!(f, " {} <= {}", format_number(b.lower), b.variable)?,
            }
        }

        if !self.integers.is_empty() {
            writeln!(f, "General")?;
            for v in &self.integers {
                writeln!(f, " {}", v)?;
            }
        }

        writeln!(f, "End")
    }
}

impl LpProblem {
    /// Serialize to the plaintext LP format consumed by external solvers
    pub fn to_lp_string(&self) -> String {
        self.to_string()
    }
}
