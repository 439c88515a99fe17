use crate::{DemoError, Grid, Productivity, SurfaceTrait, SurfaceType, SymbolicSurface, Window};
use russell_lab::Matrix;

/// Holds f, ∂f/∂x and ∂f/∂y at the evaluation point (x0, y0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub x0: f64,
    pub y0: f64,
    pub f: f64,
    pub dfdx: f64,
    pub dfdy: f64,
}

/// Implements the first-order Taylor approximation about (x0, y0)
///
/// ```text
/// z = f(x0,y0) + fx(x0,y0) (x - x0) + fy(x0,y0) (y - y0)
/// ```
///
/// where fx = ∂f/∂x and fy = ∂f/∂y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentPlane {
    pub x0: f64,
    pub y0: f64,
    pub f0: f64,
    pub dfdx: f64,
    pub dfdy: f64,
}

impl TangentPlane {
    /// Allocates the plane touching the surface at the evaluated point
    pub fn new(evaluation: &Evaluation) -> Self {
        TangentPlane {
            x0: evaluation.x0,
            y0: evaluation.y0,
            f0: evaluation.f,
            dfdx: evaluation.dfdx,
            dfdy: evaluation.dfdy,
        }
    }

    /// Calculates the height of the plane at (x, y)
    pub fn height(&self, x: f64, y: f64) -> f64 {
        self.f0 + self.dfdx * (x - self.x0) + self.dfdy * (y - self.y0)
    }
}

/// Holds everything needed to draw the surface and its tangent plane
pub struct Scene {
    pub evaluation: Evaluation,
    pub grid: Grid,

    /// True surface heights f(X, Y)
    pub surface: Matrix,

    /// Tangent plane heights
    pub tangent: Matrix,
}

/// Evaluates a surface, its gradient and its tangent plane
pub struct Model {
    actual: Box<dyn SurfaceTrait>,
    window: Window,
}

impl Model {
    /// Allocates a new instance
    pub fn new(surface_type: SurfaceType, window: Window) -> Result<Self, DemoError> {
        let actual: Box<dyn SurfaceTrait> = match surface_type {
            SurfaceType::Symbolic => Box::new(SymbolicSurface::productivity()?),
            SurfaceType::Analytical => Box::new(
                Productivity::new(Productivity::reference_params()).map_err(|e| DemoError::Setup(e.to_string()))?,
            ),
        };
        Ok(Model { actual, window })
    }

    /// Allocates a new instance with a given surface
    pub fn with_surface(actual: Box<dyn SurfaceTrait>, window: Window) -> Self {
        Model { actual, window }
    }

    /// Calculates f, ∂f/∂x and ∂f/∂y at (x0, y0)
    ///
    /// Any finite point is accepted; the slider ranges are not enforced here. Results that
    /// overflow are returned as computed (±∞ or NaN).
    pub fn evaluate(&self, x0: f64, y0: f64) -> Result<Evaluation, DemoError> {
        if !x0.is_finite() {
            return Err(DemoError::Evaluation(format!("x0 = {} is not finite", x0)));
        }
        if !y0.is_finite() {
            return Err(DemoError::Evaluation(format!("y0 = {} is not finite", y0)));
        }
        let evaluation = Evaluation {
            x0,
            y0,
            f: self.actual.calc_f(x0, y0),
            dfdx: self.actual.calc_dfdx(x0, y0),
            dfdy: self.actual.calc_dfdy(x0, y0),
        };
        tracing::debug!(x0, y0, f = evaluation.f, dfdx = evaluation.dfdx, dfdy = evaluation.dfdy, "evaluated");
        Ok(evaluation)
    }

    /// Returns the tangent plane at (x0, y0)
    pub fn tangent_plane(&self, x0: f64, y0: f64) -> Result<TangentPlane, DemoError> {
        Ok(TangentPlane::new(&self.evaluate(x0, y0)?))
    }

    /// Samples the surface and its tangent plane around (x0, y0)
    pub fn sample(&self, x0: f64, y0: f64) -> Result<Scene, DemoError> {
        let evaluation = self.evaluate(x0, y0)?;
        let plane = TangentPlane::new(&evaluation);
        let grid = Grid::new(x0, y0, &self.window).map_err(|e| DemoError::Evaluation(e.to_string()))?;
        let surface = grid.heights(|x, y| self.actual.calc_f(x, y));
        let tangent = grid.heights(|x, y| plane.height(x, y));
        Ok(Scene {
            evaluation,
            grid,
            surface,
            tangent,
        })
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
