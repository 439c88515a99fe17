use crate::{StrError, SurfaceTrait};
use std::collections::HashMap;

/// Implements the productivity model with hand-derived derivatives
///
/// ```text
/// f(x, y) = cxx x² + cyy y² + cxy x y + c
///
/// ∂f
/// ── = 2 cxx x + cxy y
/// ∂x
///
/// ∂f
/// ── = cxy x + 2 cyy y
/// ∂y
/// ```
///
/// where:
///
/// * x is the social media duration (hours per day)
/// * y is the frequency of opening the apps (per day)
/// * f is the productivity score
pub struct Productivity {
    cxx: f64, // coefficient of x²
    cyy: f64, // coefficient of y²
    cxy: f64, // coefficient of x y
    c: f64,   // constant term
}

impl Productivity {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `xx` - coefficient of x²
    /// * `yy` - coefficient of y²
    /// * `xy` - coefficient of x y
    /// * `c` - constant term
    pub fn new(params: HashMap<&str, f64>) -> Result<Self, StrError> {
        let cxx = *params.get("xx").ok_or("Parameter 'xx' not found")?;
        let cyy = *params.get("yy").ok_or("Parameter 'yy' not found")?;
        let cxy = *params.get("xy").ok_or("Parameter 'xy' not found")?;
        let c = *params.get("c").ok_or("Parameter 'c' not found")?;
        Ok(Productivity { cxx, cyy, cxy, c })
    }

    /// Returns the parameters of -0.4x² - 0.2y² + 0.5xy + 5
    pub fn reference_params() -> HashMap<&'static str, f64> {
        HashMap::from([("xx", -0.4), ("yy", -0.2), ("xy", 0.5), ("c", 5.0)])
    }
}

impl SurfaceTrait for Productivity {
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        self.cxx * x * x + self.cyy * y * y + self.cxy * x * y + self.c
    }

    fn calc_dfdx(&self, x: f64, y: f64) -> f64 {
        2.0 * self.cxx * x + self.cxy * y
    }

    fn calc_dfdy(&self, x: f64, y: f64) -> f64 {
        self.cxy * x + 2.0 * self.cyy * y
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
