use crate::{Algebra, DemoError, Evaluation, Model, Report, Scene, SymbolicSurface, Window};

/// Holds the results of one interaction
pub struct Frame {
    pub evaluation: Evaluation,
    pub report: Report,
    pub scene: Scene,
}

/// Runs the demo pipeline
///
/// The symbolic stage happens once, in [Demo::new]; each call to [Demo::frame] performs the
/// numeric stage for a new point and shares nothing with previous calls.
pub struct Demo {
    algebra: Algebra,
    model: Model,
}

impl Demo {
    /// Parses and differentiates the productivity formula
    pub fn new(window: Window) -> Result<Self, DemoError> {
        let surface = SymbolicSurface::productivity()?;
        let algebra = surface.algebra().clone();
        let model = Model::with_surface(Box::new(surface), window);
        Ok(Demo { algebra, model })
    }

    /// Returns the displayed forms of f and its partial derivatives
    pub fn algebra(&self) -> &Algebra {
        &self.algebra
    }

    /// Evaluates the point (x0, y0) and samples its neighborhood
    pub fn frame(&self, x0: f64, y0: f64) -> Result<Frame, DemoError> {
        let scene = self.model.sample(x0, y0)?;
        let evaluation = scene.evaluation;
        let report = Report::new(&self.algebra, &evaluation);
        Ok(Frame {
            evaluation,
            report,
            scene,
        })
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_works() {
        let demo = Demo::new(Window::default()).unwrap();
        let frame = demo.frame(4.0, 20.0).unwrap();
        assert_eq!(frame.evaluation, frame.scene.evaluation);
        assert_eq!(frame.report.steps[0].lines[3], "= 6.80");
        assert_eq!(frame.scene.surface.dims(), (60, 60));
        assert_eq!(demo.algebra().formula, crate::PRODUCTIVITY_FORMULA);
    }

    #[test]
    fn frame_captures_errors() {
        let demo = Demo::new(Window::default()).unwrap();
        assert!(matches!(demo.frame(f64::NAN, 0.0), Err(DemoError::Evaluation(_))));
    }
}
