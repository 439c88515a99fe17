/// Independent variables of the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Social media duration (hours per day)
    X,

    /// Number of times the apps are opened (per day)
    Y,
}

impl Variable {
    /// Returns the symbol used in formulas
    pub fn name(&self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
        }
    }

    /// Finds the variable with the given symbol
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            _ => None,
        }
    }
}

/// Selects the implementation behind a [crate::Model]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceType {
    /// Derivatives obtained by symbolic differentiation of the formula
    Symbolic,

    /// Hand-derived closed forms (used to cross-check the symbolic engine)
    Analytical,
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
