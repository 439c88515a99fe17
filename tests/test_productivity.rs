use russell_lab::{approx_eq, deriv1_forward7};
use tangent_plane_demo::{Demo, Model, SurfaceType, SymbolicSurface, Variable, Window};

// (x0, y0, f, ∂f/∂x, ∂f/∂y) worked out by hand
#[rustfmt::skip]
const REFERENCE: [(f64, f64, f64, f64, f64); 3] = [
    (4.0, 20.0, -41.4, 6.8, -6.0),
    (0.0, 0.0, 5.0, 0.0, 0.0),
    (24.0, 50.0, -125.4, 5.8, -8.0),
];

#[test]
fn test_symbolic_derivatives() {
    let surface = SymbolicSurface::productivity().unwrap();
    let algebra = surface.algebra();
    assert_eq!(algebra.f.to_latex(), "-0.4 x^{2} - 0.2 y^{2} + 0.5 x y + 5");
    assert_eq!(algebra.dfdx.to_latex(), "-0.8 x + 0.5 y");
    assert_eq!(algebra.dfdy.to_latex(), "0.5 x - 0.4 y");

    // coefficients must be exact
    let dfdx = algebra.dfdx.as_slice();
    let dfdy = algebra.dfdy.as_slice();
    assert_eq!((dfdx[0].coeff, dfdx[0].exponent(Variable::X)), (-0.8, 1));
    assert_eq!((dfdx[1].coeff, dfdx[1].exponent(Variable::Y)), (0.5, 1));
    assert_eq!((dfdy[0].coeff, dfdy[0].exponent(Variable::X)), (0.5, 1));
    assert_eq!((dfdy[1].coeff, dfdy[1].exponent(Variable::Y)), (-0.4, 1));
}

#[test]
fn test_zero_exponent() {
    let model = Model::with_surface(Box::new(SymbolicSurface::new("x^0 + y").unwrap()), Window::default());
    let res = model.evaluate(3.0, 4.0).unwrap();
    assert_eq!((res.f, res.dfdx, res.dfdy), (5.0, 0.0, 1.0));
}

#[test]
fn test_reference_points() {
    for surface_type in [SurfaceType::Symbolic, SurfaceType::Analytical] {
        let model = Model::new(surface_type, Window::default()).unwrap();
        for (x0, y0, f, dfdx, dfdy) in REFERENCE {
            let res = model.evaluate(x0, y0).unwrap();
            println!("{:?}: f({}, {}) = {}, ∇f = ({}, {})", surface_type, x0, y0, res.f, res.dfdx, res.dfdy);
            approx_eq(res.f, f, 1e-12);
            approx_eq(res.dfdx, dfdx, 1e-13);
            approx_eq(res.dfdy, dfdy, 1e-13);
        }
    }
}

#[test]
fn test_symbolic_matches_analytical() {
    let symbolic = Model::new(SurfaceType::Symbolic, Window::default()).unwrap();
    let analytical = Model::new(SurfaceType::Analytical, Window::default()).unwrap();
    for x0 in [-5.0, 0.0, 1.5, 4.0, 12.0, 24.0, 30.0] {
        for y0 in [-10.0, 0.0, 7.0, 20.0, 50.0, 80.0] {
            let a = symbolic.evaluate(x0, y0).unwrap();
            let b = analytical.evaluate(x0, y0).unwrap();
            approx_eq(a.f, b.f, 1e-11);
            approx_eq(a.dfdx, b.dfdx, 1e-12);
            approx_eq(a.dfdy, b.dfdy, 1e-12);
        }
    }
}

#[test]
fn test_finite_differences() {
    let model = Model::new(SurfaceType::Symbolic, Window::default()).unwrap();
    let args = &mut 0;
    for (x_at, y_at) in [(1.0, 2.0), (4.0, 20.0), (10.0, 35.0), (23.5, 49.0)] {
        let res = model.evaluate(x_at, y_at).unwrap();
        let num = deriv1_forward7(x_at, args, |x, _| Ok(model.evaluate(x, y_at).unwrap().f)).unwrap();
        approx_eq(res.dfdx, num, 1e-4);
        let num = deriv1_forward7(y_at, args, |y, _| Ok(model.evaluate(x_at, y).unwrap().f)).unwrap();
        approx_eq(res.dfdy, num, 1e-4);
    }
}

#[test]
fn test_idempotence() {
    let demo = Demo::new(Window::default()).unwrap();
    let a = demo.frame(7.3, 33.0).unwrap();
    let b = demo.frame(7.3, 33.0).unwrap();
    assert_eq!(a.evaluation.f.to_bits(), b.evaluation.f.to_bits());
    assert_eq!(a.evaluation.dfdx.to_bits(), b.evaluation.dfdx.to_bits());
    assert_eq!(a.evaluation.dfdy.to_bits(), b.evaluation.dfdy.to_bits());
    assert_eq!(a.report, b.report);
    assert_eq!(a.scene.surface.as_data(), b.scene.surface.as_data());
    assert_eq!(a.scene.tangent.as_data(), b.scene.tangent.as_data());
}
