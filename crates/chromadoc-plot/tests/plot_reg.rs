//! Plot emitter regression test
//!
//! Structural checks over the TikZ sources and the 2-D projection
//! raster, plus golden-file comparison of the seeded outputs.

use chromadoc_cluster::DocColorDecomposer;
use chromadoc_core::{Pix, PixelDepth, color};
use chromadoc_plot::{
    PLOT_CENTER, PLOT_SIZE, Plot3dOptions, plot_1d_clusters, plot_1d_phi, plot_2d_lab,
    plot_3d_rgb,
};
use chromadoc_test::RegParams;

fn create_test_document() -> Pix {
    let w = 60u32;
    let h = 60u32;
    let pix = Pix::new(w, h, PixelDepth::Bit32).unwrap();
    let mut pix_mut = pix.try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            let pixel = if y < 10 {
                color::compose_rgb(255, 255, 255)
            } else if x < w / 2 {
                color::compose_rgb(220, 40, 40)
            } else {
                color::compose_rgb(40, 200, 40)
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }
    pix_mut.into()
}

#[test]
fn plot_reg() {
    let mut rp = RegParams::new("plot");

    let dcd = DocColorDecomposer::new(&create_test_document()).unwrap();
    rp.compare_values(2.0, dcd.clusters().len() as f64, 0.0);

    // 3-D scatter: fixed seed, structural shape
    let opts = Plot3dOptions {
        seed: Some(42),
        ..Default::default()
    };
    let scatter = plot_3d_rgb(&dcd, &opts);
    rp.compare_values(
        1.0,
        scatter.starts_with("\\documentclass[tikz, border=1cm]{standalone}") as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, scatter.ends_with("\\end{document}\n") as u8 as f64, 0.0);
    rp.compare_values(
        1.0,
        scatter.contains("view={135.0000}{35.2500}") as u8 as f64,
        0.0,
    );

    // Sampling with a fixed seed is reproducible
    let scatter2 = plot_3d_rgb(&dcd, &opts);
    rp.compare_strings(scatter.as_bytes(), scatter2.as_bytes());

    // 1-D histograms: 359 bar segments each, divider per cluster
    let phi_plot = plot_1d_phi(&dcd);
    rp.compare_values(359.0, phi_plot.matches("\\addplot[").count() as f64, 0.0);

    let clusters_plot = plot_1d_clusters(&dcd);
    rp.compare_values(
        359.0,
        clusters_plot.matches("\\addplot[").count() as f64,
        0.0,
    );
    for &boundary in dcd.clusters() {
        rp.compare_values(
            1.0,
            clusters_plot.contains(&format!("\\draw (axis cs:{},0)", boundary)) as u8 as f64,
            0.0,
        );
    }

    // 2-D raster: canvas shape and a stamped color
    let lab_plot = plot_2d_lab(&dcd).unwrap();
    rp.compare_values(PLOT_SIZE as f64, lab_plot.width() as f64, 0.0);
    rp.compare_values(PLOT_SIZE as f64, lab_plot.height() as f64, 0.0);

    let angle = dcd.angles()[&[220, 40, 40]];
    let x = (angle.lab[0] + PLOT_CENTER) as u32;
    let y = (angle.lab[1] + PLOT_CENTER) as u32;
    rp.compare_values(
        1.0,
        (lab_plot.get_rgb(x, y).unwrap() == (220, 40, 40)) as u8 as f64,
        0.0,
    );

    // Golden comparison of the deterministic outputs
    rp.write_data_and_check(scatter.as_bytes(), "tex").unwrap();
    rp.write_data_and_check(clusters_plot.as_bytes(), "tex")
        .unwrap();
    rp.write_pix_and_check(&lab_plot).unwrap();

    assert!(rp.cleanup(), "plot regression test failed");
}
