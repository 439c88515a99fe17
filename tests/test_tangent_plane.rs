use russell_lab::approx_eq;
use tangent_plane_demo::{Demo, DemoError, Model, SurfaceType, TangentPlane, Window, render};

const SAVE_FIGURE: bool = false;

#[test]
fn test_tangent_plane_at_point() {
    let model = Model::new(SurfaceType::Symbolic, Window::default()).unwrap();
    for (x0, y0) in [(4.0, 20.0), (0.0, 0.0), (24.0, 50.0), (13.37, 41.0), (-100.0, 300.0)] {
        let evaluation = model.evaluate(x0, y0).unwrap();
        let plane = TangentPlane::new(&evaluation);
        approx_eq(plane.height(x0, y0), evaluation.f, 1e-9);

        // the plane has the gradient as slopes
        approx_eq(plane.height(x0 + 1.0, y0) - plane.height(x0, y0), evaluation.dfdx, 1e-9);
        approx_eq(plane.height(x0, y0 + 1.0) - plane.height(x0, y0), evaluation.dfdy, 1e-9);
    }
}

#[test]
fn test_grid_and_height_maps() {
    let demo = Demo::new(Window::default()).unwrap();
    for (x0, y0) in [(4.0, 20.0), (0.0, 0.0), (24.0, 50.0)] {
        let frame = demo.frame(x0, y0).unwrap();
        let scene = &frame.scene;
        assert_eq!(scene.grid.xx.dim(), 60);
        assert_eq!(scene.grid.yy.dim(), 60);
        assert_eq!(scene.grid.x_mesh.dims(), (60, 60));
        assert_eq!(scene.grid.y_mesh.dims(), (60, 60));
        assert_eq!(scene.surface.dims(), (60, 60));
        assert_eq!(scene.tangent.dims(), (60, 60));
        approx_eq(scene.grid.xx[0], x0 - 3.0, 1e-14);
        approx_eq(scene.grid.xx[59], x0 + 3.0, 1e-13);
        approx_eq(scene.grid.yy[0], y0 - 15.0, 1e-14);
        approx_eq(scene.grid.yy[59], y0 + 15.0, 1e-13);

        // the gap between surface and plane is the quadratic remainder
        //   0.4 dx² + 0.2 dy² - 0.5 dx dy
        for i in 0..60 {
            for j in 0..60 {
                let dx = scene.grid.x_mesh.get(i, j) - x0;
                let dy = scene.grid.y_mesh.get(i, j) - y0;
                let gap = scene.tangent.get(i, j) - scene.surface.get(i, j);
                approx_eq(gap, 0.4 * dx * dx + 0.2 * dy * dy - 0.5 * dx * dy, 1e-10);
            }
        }
    }

    if SAVE_FIGURE {
        let frame = demo.frame(4.0, 20.0).unwrap();
        render::draw(&frame.scene, "/tmp/tangent_plane_demo/test_tangent_plane.svg").unwrap();
    }
}

#[test]
fn test_custom_window() {
    let window = Window::new(1.0, 5.0, 11).unwrap();
    let model = Model::new(SurfaceType::Analytical, window).unwrap();
    let scene = model.sample(2.0, 10.0).unwrap();
    assert_eq!(scene.surface.dims(), (11, 11));
    approx_eq(scene.grid.xx[5], 2.0, 1e-15);
    approx_eq(scene.grid.yy[5], 10.0, 1e-15);

    // the center node is the evaluation point
    approx_eq(scene.tangent.get(5, 5), scene.surface.get(5, 5), 1e-12);
}

#[test]
fn test_non_finite_point() {
    let demo = Demo::new(Window::default()).unwrap();
    match demo.frame(f64::INFINITY, 20.0) {
        Err(DemoError::Evaluation(msg)) => assert_eq!(msg, "x0 = inf is not finite"),
        _ => panic!("infinite x0 must be rejected"),
    }
}
