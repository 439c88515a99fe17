use crate::{Algebra, Evaluation, Monomial, Terms, Variable};

const DFDX: &str = r"\frac{\partial f}{\partial x}";
const DFDY: &str = r"\frac{\partial f}{\partial y}";

/// Holds the step-by-step substitution of the evaluation point into one formula
///
/// ```text
/// ∂f/∂x = -0.8 x + 0.5 y
/// ∂f/∂x(4.00, 20.00) = -0.8 × 4.00 + 0.5 × 20.00
/// = -3.20 + 10.00
/// = 6.80
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Steps {
    pub title: String,
    pub lines: Vec<String>,
}

impl Steps {
    /// Allocates the four lines (LaTeX) for `lhs = terms` at (x0, y0) with final `value`
    ///
    /// Terms are substituted in the order they are listed.
    pub fn new(title: &str, lhs: &str, terms: &Terms, x0: f64, y0: f64, value: f64) -> Self {
        let list = terms.as_slice();
        let mut substituted = String::new();
        let mut partials = String::new();
        for (i, t) in list.iter().enumerate() {
            let v = t.eval(x0, y0);
            if i == 0 {
                substituted.push_str(&substitute(t, t.coeff, x0, y0));
                partials.push_str(&partial_value(t, v));
            } else {
                let op = if t.coeff < 0.0 { " - " } else { " + " };
                substituted.push_str(op);
                substituted.push_str(&substitute(t, f64::abs(t.coeff), x0, y0));
                partials.push_str(op);
                partials.push_str(&partial_value(t, f64::abs(v)));
            }
        }
        if list.is_empty() {
            substituted.push('0');
            partials.push_str("0.00");
        }
        Steps {
            title: title.to_string(),
            lines: vec![
                format!("{} = {}", lhs, terms.to_latex()),
                format!("{}({:.2}, {:.2}) = {}", lhs, x0, y0, substituted),
                format!("= {}", partials),
                format!("= {:.2}", value),
            ],
        }
    }
}

// constants are written as given; other terms with two decimals
fn partial_value(t: &Monomial, v: f64) -> String {
    if t.is_constant() { format!("{}", v) } else { format!("{:.2}", v) }
}

// writes a term with the values in place of the variables, e.g., -0.4 \times (4.00)^{2}
fn substitute(t: &Monomial, coeff: f64, x0: f64, y0: f64) -> String {
    let mut factors = Vec::new();
    if coeff.abs() != 1.0 || t.is_constant() {
        factors.push(format!("{}", coeff));
    } else if coeff < 0.0 {
        factors.push("-1".to_string());
    }
    for (var, value) in [(Variable::X, x0), (Variable::Y, y0)] {
        match t.exponent(var) {
            0 => (),
            1 => factors.push(format!("{:.2}", value)),
            e => factors.push(format!("({:.2})^{{{}}}", value, e)),
        }
    }
    factors.join(r" \times ")
}

/// Holds the text displayed for one evaluation point
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// LaTeX of f (as written), ∂f/∂x and ∂f/∂y (as derived)
    pub formulas: Vec<String>,

    /// Substitution steps for ∂f/∂x, ∂f/∂y and f (in this order)
    pub steps: Vec<Steps>,

    /// Productivity score and gradient
    pub summary: Vec<String>,
}

impl Report {
    /// Allocates a new instance
    pub fn new(algebra: &Algebra, evaluation: &Evaluation) -> Self {
        let Evaluation { x0, y0, f, dfdx, dfdy } = *evaluation;
        let formulas = vec![
            format!("f(x, y) = {}", algebra.f.to_latex()),
            format!("{} = {}", DFDX, algebra.dfdx_latex),
            format!("{} = {}", DFDY, algebra.dfdy_latex),
        ];
        let steps = vec![
            Steps::new("Evaluating ∂f/∂x", DFDX, &algebra.dfdx, x0, y0, dfdx),
            Steps::new("Evaluating ∂f/∂y", DFDY, &algebra.dfdy, x0, y0, dfdy),
            Steps::new("Evaluating the productivity f(x, y)", "f", &algebra.f, x0, y0, f),
        ];
        let summary = vec![
            format!("Productivity score (f(x, y)): {}", f),
            format!("Gradient (∂f/∂x, ∂f/∂y): ({:.2}, {:.2})", dfdx, dfdy),
        ];
        Report {
            formulas,
            steps,
            summary,
        }
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
