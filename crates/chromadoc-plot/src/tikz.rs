//! pgfplots emitters
//!
//! Textual LaTeX/TikZ plots of the decomposition internals: the 3-D RGB
//! scatter of the document colors, the raw angular histogram and the
//! smoothed histogram with cluster dividers. Every emitter produces a
//! standalone compilable document and degrades to a syntactically valid
//! empty plot when the input carries no colors.

use crate::mean::{cluster_to_mean_rgb, phi_to_mean_rgb};
use chromadoc_cluster::{DocColorDecomposer, PHI_BINS};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use std::fmt::Write;

/// Options for the 3-D RGB scatter plot
#[derive(Debug, Clone)]
pub struct Plot3dOptions {
    /// Yaw rotation of the view in degrees
    pub yaw: f64,
    /// Pitch rotation of the view in degrees
    pub pitch: f64,
    /// Maximum number of sampled colors
    pub max_points: usize,
    /// Seed for the color sampling; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for Plot3dOptions {
    fn default() -> Self {
        Self {
            yaw: 135.0,
            pitch: 35.25,
            max_points: 5000,
            seed: None,
        }
    }
}

fn prologue(plot: &mut String) {
    plot.push_str("\\documentclass[tikz, border=1cm]{standalone}\n");
    plot.push_str("\\usepackage{pgfplots}\n");
    plot.push_str("\\pgfplotsset{compat=newest}\n\n");

    plot.push_str("\\pagecolor{black}\n");
    plot.push_str("\\color{white}\n\n");

    plot.push_str("\\begin{document}\n");
    plot.push_str("\\begin{tikzpicture}\n\n");
}

fn epilogue(plot: &mut String) {
    plot.push_str("\\end{axis}\n");
    plot.push_str("\\end{tikzpicture}\n");
    plot.push_str("\\end{document}\n");
}

/// Emit the 3-D scatter plot of the document colors in unit RGB space.
///
/// Up to `max_points` colors are sampled without replacement from the
/// color map; with a fixed seed the output is reproducible.
pub fn plot_3d_rgb(dcd: &DocColorDecomposer, opts: &Plot3dOptions) -> String {
    let mut plot = String::new();
    prologue(&mut plot);

    plot.push_str("\\begin{axis}[\n");
    let _ = writeln!(plot, "  view={{{:.4}}}{{{:.4}}},", opts.yaw, opts.pitch);
    plot.push_str("  height=10cm,\n");
    plot.push_str("  width=10cm,\n");
    plot.push_str("  scale only axis,\n");
    plot.push_str("  xmin=0, xmax=1,\n");
    plot.push_str("  ymin=0, ymax=1,\n");
    plot.push_str("  zmin=0, zmax=1,\n");
    plot.push_str("  tick style={white},\n");
    plot.push_str("  xlabel={$R$},\n");
    plot.push_str("  ylabel={$G$},\n");
    plot.push_str("  zlabel={$B$}\n");
    plot.push_str("]\n\n");

    plot.push_str("\\addplot3[\n");
    plot.push_str("  scatter,\n");
    plot.push_str("  scatter/@pre marker code/.code={\n");
    plot.push_str("    \\edef\\temp{\\noexpand\\definecolor{mycolor}{rgb}{\\pgfplotspointmeta}}\n");
    plot.push_str("    \\temp\n");
    plot.push_str("    \\scope[color=mycolor]\n");
    plot.push_str("  },\n");
    plot.push_str("  scatter/@post marker code/.code={\n");
    plot.push_str("    \\endscope\n");
    plot.push_str("  },\n");
    plot.push_str("  only marks,\n");
    plot.push_str("  mark size=0.01cm,\n");
    plot.push_str(
        "  point meta={TeX code symbolic={\\edef\\pgfplotspointmeta{\\thisrow{R}, \\thisrow{G}, \\thisrow{B}}}}\n",
    );
    plot.push_str("]\n");
    plot.push_str("table[] {\n");
    plot.push_str("R G B\n");

    for rgb in sample_colors(dcd, opts) {
        let _ = writeln!(
            plot,
            "{:.4} {:.4} {:.4}",
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0
        );
    }

    plot.push_str("};\n\n");
    epilogue(&mut plot);

    plot
}

/// Sample up to `max_points` colors, preserving the map's key order
fn sample_colors(dcd: &DocColorDecomposer, opts: &Plot3dOptions) -> Vec<[u8; 3]> {
    let colors: Vec<[u8; 3]> = dcd.color_counts().keys().copied().collect();
    if colors.len() <= opts.max_points {
        return colors;
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::try_from_rng(&mut rand::rngs::SysRng).unwrap(),
    };

    let mut chosen = index::sample(&mut rng, colors.len(), opts.max_points).into_vec();
    chosen.sort_unstable();
    chosen.into_iter().map(|i| colors[i]).collect()
}

/// Emit the raw angular histogram with bars colored by per-angle mean RGB.
pub fn plot_1d_phi(dcd: &DocColorDecomposer) -> String {
    let raw = dcd.phi_hist();
    let max_n = raw.iter().fold(0.0f64, |a, &b| a.max(b)).round() as i64;
    let values: Vec<i64> = raw.iter().map(|&v| v.round() as i64).collect();

    histogram_plot(&values, max_n, &phi_to_mean_rgb(dcd), &[])
}

/// Emit the smoothed histogram with per-cluster bar colors and one
/// vertical divider per cluster boundary.
pub fn plot_1d_clusters(dcd: &DocColorDecomposer) -> String {
    let smoothed = dcd.smoothed_phi_hist();
    let max_n = smoothed.iter().copied().max().unwrap_or(0);

    let cluster_means = cluster_to_mean_rgb(dcd);
    let table = dcd.phi_to_cluster();
    let bar_colors: Vec<[u8; 3]> = (0..PHI_BINS)
        .map(|phi| {
            let cluster = table[phi] as usize;
            cluster_means.get(cluster).copied().unwrap_or([0, 0, 0])
        })
        .collect();

    histogram_plot(smoothed, max_n, &bar_colors, dcd.clusters())
}

/// Shared bar-plot shape of the two 1-D emitters
fn histogram_plot(values: &[i64], max_n: i64, bar_colors: &[[u8; 3]], dividers: &[u16]) -> String {
    let mut plot = String::new();
    prologue(&mut plot);

    plot.push_str("\\begin{axis}[\n");
    plot.push_str("  height=10cm,\n");
    plot.push_str("  width=30cm,\n");
    plot.push_str("  xmin=0, xmax=360,\n");
    let _ = writeln!(plot, "  ymin=0, ymax={},", max_n);
    plot.push_str("  tick style={white},\n");
    plot.push_str("  xtick style={draw=none},\n");
    plot.push_str("  xlabel={$\\phi$},\n");
    plot.push_str("  ylabel={$n$}\n");
    plot.push_str("]\n\n");

    for phi in 0..PHI_BINS - 1 {
        let [r, g, b] = bar_colors[phi];
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        plot.push_str("\\addplot[\n");
        plot.push_str("  ybar interval,\n");
        let _ = writeln!(
            plot,
            "  color={{rgb,1: red,{:.4}; green,{:.4}; blue,{:.4}}},",
            r, g, b
        );
        let _ = writeln!(
            plot,
            "  fill={{rgb,1: red,{:.4}; green,{:.4}; blue,{:.4}}}",
            r, g, b
        );
        plot.push_str("]\n");
        plot.push_str("table[] {\n");
        plot.push_str("X Y\n");
        let _ = writeln!(plot, "{} {}", phi, values[phi]);
        let _ = writeln!(plot, "{} {}", phi + 1, values[phi + 1]);
        plot.push_str("};\n\n");
    }

    for &divider in dividers {
        let _ = writeln!(
            plot,
            "\\draw (axis cs:{},0) -- (axis cs:{},{});",
            divider, divider, max_n
        );
    }
    if !dividers.is_empty() {
        plot.push('\n');
    }

    plot.push_str("\\draw (axis cs:0,0) -- (axis cs:360,0);\n");
    let _ = writeln!(
        plot,
        "\\draw (axis cs:0,{}) -- (axis cs:360,{});",
        max_n, max_n
    );
    plot.push('\n');

    epilogue(&mut plot);
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromadoc_core::{Pix, PixelDepth, color};

    fn two_color_doc() -> DocColorDecomposer {
        let pix = Pix::new(20, 20, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        for y in 0..20 {
            for x in 0..20 {
                let word = if x < 10 {
                    color::compose_rgb(220, 40, 40)
                } else {
                    color::compose_rgb(40, 200, 40)
                };
                pix_mut.set_pixel_unchecked(x, y, word);
            }
        }
        DocColorDecomposer::new(&pix_mut.into()).unwrap()
    }

    fn white_doc() -> DocColorDecomposer {
        let white = color::compose_rgb(255, 255, 255);
        let pix = Pix::new_with_value(8, 8, PixelDepth::Bit32, white).unwrap();
        DocColorDecomposer::new(&pix).unwrap()
    }

    #[test]
    fn test_3d_plot_structure() {
        let dcd = two_color_doc();
        let plot = plot_3d_rgb(&dcd, &Plot3dOptions::default());

        assert!(plot.starts_with("\\documentclass[tikz, border=1cm]{standalone}\n"));
        assert!(plot.ends_with("\\end{document}\n"));
        assert!(plot.contains("view={135.0000}{35.2500}"));
        assert!(plot.contains("R G B\n"));
        // Both document colors appear as unit-cube rows
        assert!(plot.contains("0.8627 0.1569 0.1569"));
        assert!(plot.contains("0.1569 0.7843 0.1569"));
    }

    #[test]
    fn test_3d_plot_seeded_sampling_is_reproducible() {
        // A synthetic document with more colors than max_points
        let pix = Pix::new(128, 128, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        for y in 0..128u32 {
            for x in 0..128u32 {
                pix_mut.set_pixel_unchecked(
                    x,
                    y,
                    color::compose_rgb(200, (x % 128) as u8, (y % 128) as u8 + 64),
                );
            }
        }
        let pix: Pix = pix_mut.into();
        let dcd = chromadoc_cluster::DocColorDecomposer::new(&pix).unwrap();
        assert!(dcd.color_counts().len() > 1000);

        let opts = Plot3dOptions {
            max_points: 100,
            seed: Some(7),
            ..Default::default()
        };
        let a = plot_3d_rgb(&dcd, &opts);
        let b = plot_3d_rgb(&dcd, &opts);
        assert_eq!(a, b);

        let other = plot_3d_rgb(
            &dcd,
            &Plot3dOptions {
                seed: Some(8),
                ..opts
            },
        );
        assert_ne!(a, other);
    }

    #[test]
    fn test_1d_phi_plot_structure() {
        let dcd = two_color_doc();
        let plot = plot_1d_phi(&dcd);

        assert!(plot.contains("xmin=0, xmax=360"));
        // 359 bar segments
        assert_eq!(plot.matches("\\addplot[").count(), 359);
        assert!(plot.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_1d_clusters_plot_has_dividers() {
        let dcd = two_color_doc();
        assert_eq!(dcd.clusters().len(), 2);

        let plot = plot_1d_clusters(&dcd);
        for &boundary in dcd.clusters() {
            assert!(plot.contains(&format!("\\draw (axis cs:{},0)", boundary)));
        }
    }

    #[test]
    fn test_empty_plots_are_valid() {
        let dcd = white_doc();

        let phi = plot_1d_phi(&dcd);
        assert!(phi.contains("ymin=0, ymax=0,"));
        assert!(phi.ends_with("\\end{document}\n"));

        let clusters = plot_1d_clusters(&dcd);
        assert!(clusters.ends_with("\\end{document}\n"));

        let scatter = plot_3d_rgb(&dcd, &Plot3dOptions::default());
        // Only the white point row
        assert!(scatter.contains("1.0000 1.0000 1.0000"));
    }
}
