use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Default half-width of the window along x (duration, hours)
pub const HALF_WIDTH_X: f64 = 3.0;

/// Default half-width of the window along y (frequency, openings)
pub const HALF_WIDTH_Y: f64 = 15.0;

/// Default number of samples along each axis
pub const N_SAMPLES: usize = 60;

/// Defines the neighborhood sampled around the evaluation point
///
/// ```text
/// x ∈ [x0 - half_x, x0 + half_x]
/// y ∈ [y0 - half_y, y0 + half_y]
/// ```
///
/// The half-widths are a fixed pair; there is no rule relating one to the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub half_x: f64,
    pub half_y: f64,
    pub npoint: usize,
}

impl Window {
    /// Allocates a new instance
    pub fn new(half_x: f64, half_y: f64, npoint: usize) -> Result<Self, StrError> {
        if !(half_x.is_finite() && half_x > 0.0) {
            return Err("half_x must be finite and positive");
        }
        if !(half_y.is_finite() && half_y > 0.0) {
            return Err("half_y must be finite and positive");
        }
        if npoint < 2 {
            return Err("npoint must be at least 2");
        }
        Ok(Window { half_x, half_y, npoint })
    }
}

impl Default for Window {
    fn default() -> Self {
        Window {
            half_x: HALF_WIDTH_X,
            half_y: HALF_WIDTH_Y,
            npoint: N_SAMPLES,
        }
    }
}

/// Holds the sample coordinates around an evaluation point
///
/// The meshes follow the `meshgrid` convention: row `i` corresponds to `yy[i]` and column `j`
/// to `xx[j]`, thus `x_mesh[i][j] = xx[j]` and `y_mesh[i][j] = yy[i]`.
pub struct Grid {
    pub xx: Vector,
    pub yy: Vector,
    pub x_mesh: Matrix,
    pub y_mesh: Matrix,
}

impl Grid {
    /// Allocates the grid centered at (x0, y0)
    pub fn new(x0: f64, y0: f64, window: &Window) -> Result<Self, StrError> {
        let xx = Vector::linspace(x0 - window.half_x, x0 + window.half_x, window.npoint)?;
        let yy = Vector::linspace(y0 - window.half_y, y0 + window.half_y, window.npoint)?;
        let (nx, ny) = (xx.dim(), yy.dim());
        let mut x_mesh = Matrix::new(ny, nx);
        let mut y_mesh = Matrix::new(ny, nx);
        for i in 0..ny {
            for j in 0..nx {
                x_mesh.set(i, j, xx[j]);
                y_mesh.set(i, j, yy[i]);
            }
        }
        Ok(Grid { xx, yy, x_mesh, y_mesh })
    }

    /// Returns (number of rows, number of columns) = (len(yy), len(xx))
    pub fn dims(&self) -> (usize, usize) {
        (self.yy.dim(), self.xx.dim())
    }

    /// Evaluates `height(x, y)` at every node
    pub fn heights<F>(&self, mut height: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        let (nrow, ncol) = self.dims();
        let mut zz = Matrix::new(nrow, ncol);
        for i in 0..nrow {
            for j in 0..ncol {
                zz.set(i, j, height(self.xx[j], self.yy[i]));
            }
        }
        zz
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
