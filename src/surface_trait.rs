/// Defines a smooth surface z = f(x,y) together with its first partial derivatives
///
/// ```text
///         ∂f            ∂f
/// f(x,y), ── (x,y) and  ── (x,y)
///         ∂x            ∂y
/// ```
///
/// Implementations are evaluated pointwise by [crate::Model], which builds the tangent plane
/// and samples the surface around the evaluation point from these three functions only.
pub trait SurfaceTrait {
    /// Calculates the height z = f(x,y)
    fn calc_f(&self, x: f64, y: f64) -> f64;

    /// Calculates ∂f/∂x
    fn calc_dfdx(&self, x: f64, y: f64) -> f64;

    /// Calculates ∂f/∂y
    fn calc_dfdy(&self, x: f64, y: f64) -> f64;
}
