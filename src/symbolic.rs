use crate::{DemoError, SurfaceTrait, Terms};
use std::collections::HashSet;
use symb_anafis::{CompiledEvaluator, Diff, DiffError, Expr, parse};

/// Productivity as a function of social media duration (x) and frequency (y)
pub const PRODUCTIVITY_FORMULA: &str = "-0.4*x^2 - 0.2*y^2 + 0.5*x*y + 5";

/// Order of the parameters passed to the compiled evaluators
const VARIABLES: [&str; 2] = ["x", "y"];

/// Holds the displayed forms of f, ∂f/∂x and ∂f/∂y
#[derive(Clone, Debug, PartialEq)]
pub struct Algebra {
    /// The formula as given
    pub formula: String,

    /// Terms of f in the written order
    pub f: Terms,

    /// Terms of ∂f/∂x in canonical order
    pub dfdx: Terms,

    /// Terms of ∂f/∂y in canonical order
    pub dfdy: Terms,

    /// LaTeX of ∂f/∂x as produced by the differentiation engine
    pub dfdx_latex: String,

    /// LaTeX of ∂f/∂y as produced by the differentiation engine
    pub dfdy_latex: String,
}

/// Implements a surface whose partial derivatives are obtained symbolically
///
/// ```text
/// z = f(x, y)
///
/// ∂f        ∂f
/// ──  and   ──  are derived once, when the surface is allocated
/// ∂x        ∂y
/// ```
///
/// The three expressions are compiled with parameters (x, y), so every later call is numeric.
#[derive(Clone)]
pub struct SymbolicSurface {
    algebra: Algebra,
    f: CompiledEvaluator,
    dfdx: CompiledEvaluator,
    dfdy: CompiledEvaluator,
}

// CompiledEvaluator does not implement Debug, so only the algebra is shown
impl std::fmt::Debug for SymbolicSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolicSurface").field("algebra", &self.algebra).finish_non_exhaustive()
    }
}

impl SymbolicSurface {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `formula` - polynomial in x and y, e.g., `-0.4*x^2 + 5`
    pub fn new(formula: &str) -> Result<Self, DemoError> {
        let f_expr = read(formula)?;
        let terms = Terms::read(formula)?;

        let diff = Diff::new();
        let dfdx_text = diff.diff_str(formula, "x", &[]).map_err(setup)?;
        let dfdy_text = diff.diff_str(formula, "y", &[]).map_err(setup)?;
        let dfdx_expr = read(&dfdx_text)?;
        let dfdy_expr = read(&dfdy_text)?;
        tracing::debug!(formula, dfdx = %dfdx_text, dfdy = %dfdy_text, "derived partial derivatives");

        let algebra = Algebra {
            formula: formula.to_string(),
            f: terms,
            dfdx: Terms::read(&dfdx_text)?.canonical(),
            dfdy: Terms::read(&dfdy_text)?.canonical(),
            dfdx_latex: dfdx_expr.to_latex(),
            dfdy_latex: dfdy_expr.to_latex(),
        };
        Ok(SymbolicSurface {
            algebra,
            f: compile(&f_expr)?,
            dfdx: compile(&dfdx_expr)?,
            dfdy: compile(&dfdy_expr)?,
        })
    }

    /// Allocates the surface of [PRODUCTIVITY_FORMULA]
    pub fn productivity() -> Result<Self, DemoError> {
        SymbolicSurface::new(PRODUCTIVITY_FORMULA)
    }

    /// Returns the displayed forms of f and its partial derivatives
    pub fn algebra(&self) -> &Algebra {
        &self.algebra
    }
}

impl SurfaceTrait for SymbolicSurface {
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        self.f.evaluate(&[x, y])
    }

    fn calc_dfdx(&self, x: f64, y: f64) -> f64 {
        self.dfdx.evaluate(&[x, y])
    }

    fn calc_dfdy(&self, x: f64, y: f64) -> f64 {
        self.dfdy.evaluate(&[x, y])
    }
}

fn setup(e: DiffError) -> DemoError {
    DemoError::Setup(e.to_string())
}

fn read(text: &str) -> Result<Expr, DemoError> {
    let empty: HashSet<String> = HashSet::new();
    parse(text, &empty, &empty, None).map_err(setup)
}

fn compile(expr: &Expr) -> Result<CompiledEvaluator, DemoError> {
    CompiledEvaluator::compile(expr, &VARIABLES[..], None).map_err(setup)
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
