use crate::{DemoError, Scene};
use plotpy::{Curve, Legend, Plot, Surface};
use russell_lab::Matrix;

/// Draws the surface, the tangent plane and the evaluation point
///
/// The true surface uses the viridis colormap; the tangent plane is drawn as a tomato wireframe
/// so that the surface remains visible underneath. The legend uses proxy curves because
/// matplotlib cannot add 3D surfaces to a legend.
///
/// Saving requires python3 with matplotlib (see [plotpy]).
pub fn draw(scene: &Scene, figure_path: &str) -> Result<(), DemoError> {
    let ev = &scene.evaluation;
    let xx = rows(&scene.grid.x_mesh);
    let yy = rows(&scene.grid.y_mesh);

    // true surface
    let mut surface = Surface::new();
    surface
        .set_colormap_name("viridis")
        .draw(&xx, &yy, &rows(&scene.surface));

    // tangent plane
    let mut plane = Surface::new();
    plane
        .set_with_surface(false)
        .set_with_wireframe(true)
        .set_wire_line_color("tomato")
        .draw(&xx, &yy, &rows(&scene.tangent));

    // evaluation point
    let (px, py, pz) = (vec![ev.x0], vec![ev.y0], vec![ev.f]);
    let mut point = Curve::new();
    point
        .set_label("Evaluation point")
        .set_line_style("None")
        .set_marker_style("o")
        .set_marker_color("black")
        .set_marker_line_color("black")
        .set_marker_size(8.0)
        .draw_3d(&px, &py, &pz);

    // legend proxies (single-point lines are invisible)
    let mut proxy_plane = Curve::new();
    proxy_plane
        .set_label("Tangent plane")
        .set_line_color("tomato")
        .set_line_width(4.0)
        .draw_3d(&px, &py, &pz);
    let mut proxy_surface = Curve::new();
    proxy_surface
        .set_label("Productivity surface")
        .set_line_color("mediumseagreen")
        .set_line_width(4.0)
        .draw_3d(&px, &py, &pz);
    let mut legend = Legend::new();
    legend.set_location("upper right").draw();

    let mut plot = Plot::new();
    plot.add(&surface)
        .add(&plane)
        .add(&point)
        .add(&proxy_plane)
        .add(&proxy_surface)
        .add(&legend)
        .set_title("Productivity and its tangent plane")
        .set_label_x("Social media duration (hours)")
        .set_label_y("App openings per day")
        .set_label_z("Productivity score")
        .set_camera(30.0, 45.0)
        .set_figure_size_points(720.0, 432.0);
    plot.save(figure_path)
        .map_err(|e| DemoError::Evaluation(format!("cannot save figure '{}': {}", figure_path, e)))?;
    tracing::info!(figure_path, "figure saved");
    Ok(())
}

// converts the matrix into nested rows as plotpy expects
fn rows(mat: &Matrix) -> Vec<Vec<f64>> {
    let (nrow, ncol) = mat.dims();
    (0..nrow).map(|i| (0..ncol).map(|j| mat.get(i, j)).collect()).collect()
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_works() {
        let mat = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(rows(&mat), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }
}
