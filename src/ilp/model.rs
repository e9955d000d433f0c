//! Integer program model: variables, linear constraints, objective.

use crate::config::SolverConfig;
use crate::error::{Error, Result};

use super::branch;
use super::IlpSolution;

/// Handle to a variable of an [`IlpModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Position of this variable in the model.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Domain of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Integral in `[0, 1]` (bounds may be tightened to fix it).
    Binary,
    /// Real-valued within its bounds.
    Continuous,
}

#[derive(Debug, Clone)]
struct VarSpec {
    name: String,
    kind: VarKind,
    lower: f64,
    upper: f64,
    cost: f64,
}

/// Relation between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Le,
    Ge,
    Eq,
}

impl From<Comparison> for minilp::ComparisonOp {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Le => minilp::ComparisonOp::Le,
            Comparison::Ge => minilp::ComparisonOp::Ge,
            Comparison::Eq => minilp::ComparisonOp::Eq,
        }
    }
}

/// A sum of `coefficient * variable` terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(Var, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, var: Var, coef: f64) {
        self.terms.push((var, coef));
    }

    pub fn terms(&self) -> &[(Var, f64)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Value of the expression under the given variable assignment.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }
}

impl FromIterator<(Var, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (Var, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// A linear constraint `expr cmp rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub expr: LinearExpr,
    pub cmp: Comparison,
    pub rhs: f64,
}

impl Constraint {
    /// Checks the constraint against an assignment, allowing `tol` slack.
    pub fn is_satisfied(&self, values: &[f64], tol: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.cmp {
            Comparison::Le => lhs <= self.rhs + tol,
            Comparison::Ge => lhs >= self.rhs - tol,
            Comparison::Eq => (lhs - self.rhs).abs() <= tol,
        }
    }
}

/// A minimization integer program.
///
/// Constraints are only ever appended; the lazy cut loop relies on the
/// feasible region shrinking monotonically.
///
/// # Examples
///
/// ```
/// use tsp_exact::ilp::{Comparison, IlpModel, LinearExpr};
/// use tsp_exact::SolverConfig;
///
/// let mut model = IlpModel::new();
/// let a = model.add_binary("a", 3.0);
/// let b = model.add_binary("b", 2.0);
/// let expr: LinearExpr = [(a, 1.0), (b, 1.0)].into_iter().collect();
/// model.add_constraint(expr, Comparison::Ge, 1.0);
///
/// let solution = model.solve(&SolverConfig::default()).expect("feasible");
/// assert_eq!(solution.objective(), 2.0);
/// assert_eq!(solution.value(b), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IlpModel {
    vars: Vec<VarSpec>,
    constraints: Vec<Constraint>,
}

impl IlpModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binary variable with the given objective coefficient.
    pub fn add_binary(&mut self, name: impl Into<String>, cost: f64) -> Var {
        self.push_var(name.into(), VarKind::Binary, 0.0, 1.0, cost)
    }

    /// Adds a continuous variable bounded by `[lower, upper]`.
    pub fn add_continuous(
        &mut self,
        name: impl Into<String>,
        cost: f64,
        lower: f64,
        upper: f64,
    ) -> Var {
        self.push_var(name.into(), VarKind::Continuous, lower, upper, cost)
    }

    fn push_var(&mut self, name: String, kind: VarKind, lower: f64, upper: f64, cost: f64) -> Var {
        let var = Var(self.vars.len());
        self.vars.push(VarSpec {
            name,
            kind,
            lower,
            upper,
            cost,
        });
        var
    }

    /// Appends the constraint `expr cmp rhs`.
    pub fn add_constraint(&mut self, expr: LinearExpr, cmp: Comparison, rhs: f64) {
        self.constraints.push(Constraint { expr, cmp, rhs });
    }

    /// Tightens the bounds of a variable; `lower == upper` fixes it.
    pub fn set_bounds(&mut self, var: Var, lower: f64, upper: f64) {
        let entry = &mut self.vars[var.index()];
        entry.lower = lower;
        entry.upper = upper;
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn var_name(&self, var: Var) -> &str {
        &self.vars[var.index()].name
    }

    pub fn var_kind(&self, var: Var) -> VarKind {
        self.vars[var.index()].kind
    }

    /// Objective value of an assignment.
    pub fn objective_of(&self, values: &[f64]) -> f64 {
        self.vars
            .iter()
            .zip(values)
            .map(|(entry, value)| entry.cost * value)
            .sum()
    }

    /// Solves the model to integral optimality.
    ///
    /// Returns [`Error::Infeasible`] when no assignment satisfies the
    /// constraints and bounds.
    pub fn solve(&self, config: &SolverConfig) -> Result<IlpSolution> {
        if self.vars.iter().any(|v| v.lower > v.upper) {
            return Err(Error::Infeasible);
        }

        let mut problem = minilp::Problem::new(minilp::OptimizationDirection::Minimize);
        let lp_vars: Vec<minilp::Variable> = self
            .vars
            .iter()
            .map(|entry| problem.add_var(entry.cost, (entry.lower, entry.upper)))
            .collect();

        for constraint in &self.constraints {
            let mut expr = minilp::LinearExpr::empty();
            for &(var, coef) in constraint.expr.terms() {
                expr.add(lp_vars[var.index()], coef);
            }
            problem.add_constraint(expr, constraint.cmp.into(), constraint.rhs);
        }

        let binaries: Vec<usize> = self
            .vars
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.kind == VarKind::Binary)
            .map(|(i, _)| i)
            .collect();

        let root = problem.solve()?;
        let (mut values, lp_nodes) = branch::search(root, &lp_vars, &binaries, config)?;
        for &i in &binaries {
            values[i] = values[i].round();
        }
        let objective = self.objective_of(&values);
        Ok(IlpSolution::new(values, objective, lp_nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_optimum_over_fractional_lp() {
        // LP optimum is a = b = c = 0.5 (cost 3); integral optimum picks two vars.
        let mut model = IlpModel::new();
        let a = model.add_binary("a", 2.0);
        let b = model.add_binary("b", 2.0);
        let c = model.add_binary("c", 2.0);
        for (x, y) in [(a, b), (b, c), (a, c)] {
            model.add_constraint([(x, 1.0), (y, 1.0)].into_iter().collect(), Comparison::Ge, 1.0);
        }
        let solution = model.solve(&SolverConfig::default()).expect("feasible");
        assert!((solution.objective() - 4.0).abs() < 1e-9);
        let ones = [a, b, c]
            .iter()
            .filter(|&&v| solution.value(v) > 0.5)
            .count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_infeasible() {
        let mut model = IlpModel::new();
        let a = model.add_binary("a", 1.0);
        model.add_constraint([(a, 1.0)].into_iter().collect(), Comparison::Ge, 2.0);
        let err = model.solve(&SolverConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Infeasible));
    }

    #[test]
    fn test_fixed_bounds() {
        let mut model = IlpModel::new();
        let a = model.add_binary("a", 1.0);
        let b = model.add_binary("b", 5.0);
        model.add_constraint([(a, 1.0), (b, 1.0)].into_iter().collect(), Comparison::Eq, 1.0);
        model.set_bounds(a, 0.0, 0.0);
        let solution = model.solve(&SolverConfig::default()).expect("feasible");
        assert_eq!(solution.value(a), 0.0);
        assert_eq!(solution.value(b), 1.0);
    }

    #[test]
    fn test_continuous_vars_are_not_branched() {
        let mut model = IlpModel::new();
        let u = model.add_continuous("u", 1.0, 0.0, 10.0);
        model.add_constraint([(u, 2.0)].into_iter().collect(), Comparison::Ge, 3.0);
        let solution = model.solve(&SolverConfig::default()).expect("feasible");
        assert!((solution.value(u) - 1.5).abs() < 1e-9);
        assert_eq!(model.var_kind(u), VarKind::Continuous);
    }

    #[test]
    fn test_constraint_satisfaction() {
        let mut model = IlpModel::new();
        let a = model.add_binary("a", 1.0);
        let b = model.add_binary("b", 1.0);
        model.add_constraint([(a, 1.0), (b, 1.0)].into_iter().collect(), Comparison::Le, 1.0);
        let c = &model.constraints()[0];
        assert!(c.is_satisfied(&[1.0, 0.0], 1e-9));
        assert!(!c.is_satisfied(&[1.0, 1.0], 1e-9));
        assert_eq!(model.var_name(b), "b");
        assert_eq!(model.objective_of(&[1.0, 1.0]), 2.0);
    }
}
