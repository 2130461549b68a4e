use anyhow::{Context, Result};
use chromadoc::{DecomposerOptions, DocColorDecomposer, Plot3dOptions};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Decompose a document image into single-color layers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document image (PNG)
    input: PathBuf,

    /// Output directory for the layer PNGs
    outdir: PathBuf,

    /// Histogram smoothing tolerance; larger values merge nearby hue
    /// peaks and yield fewer layers (odd positive)
    #[arg(long, default_value_t = 35)]
    tolerance: u32,

    /// Skip the saturation/lightness preprocessing
    #[arg(long)]
    nopreprocess: bool,

    /// Also emit the merged composite and the diagnostic plots
    #[arg(long)]
    visualize: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let src = chromadoc::read_image(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let opts = DecomposerOptions {
        tolerance: args.tolerance,
        preprocessing: !args.nopreprocess,
        hue_smoothing: None,
    };
    let dcd = DocColorDecomposer::with_options(&src, &opts)
        .with_context(|| format!("cannot decompose {}", args.input.display()))?;

    fs::create_dir_all(&args.outdir)
        .with_context(|| format!("cannot create {}", args.outdir.display()))?;

    let stem = file_stem(&args.input);

    for (idx, layer) in dcd.layers().iter().enumerate() {
        let path = args.outdir.join(format!("{}-layer-{}.png", stem, idx + 1));
        chromadoc::write_image(layer, &path)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }

    println!(
        "{}: {} clusters, {} layers written to {}",
        args.input.display(),
        dcd.clusters().len(),
        dcd.layers().len(),
        args.outdir.display()
    );

    if args.visualize {
        write_visualizations(&dcd, &args.outdir, &stem)?;
    }

    Ok(())
}

fn write_visualizations(dcd: &DocColorDecomposer, outdir: &Path, stem: &str) -> Result<()> {
    let merged = dcd.merge_layers()?;
    chromadoc::write_image(&merged, outdir.join(format!("{}-merged-layers.png", stem)))?;

    let lab_plot = chromadoc::plot_2d_lab(dcd)?;
    chromadoc::write_image(&lab_plot, outdir.join(format!("{}-plot-2d-lab.png", stem)))?;

    let scatter = chromadoc::plot_3d_rgb(dcd, &Plot3dOptions::default());
    fs::write(outdir.join(format!("{}-plot-3d-rgb.tex", stem)), scatter)?;

    fs::write(
        outdir.join(format!("{}-plot-1d-phi.tex", stem)),
        chromadoc::plot_1d_phi(dcd),
    )?;
    fs::write(
        outdir.join(format!("{}-plot-1d-clusters.tex", stem)),
        chromadoc::plot_1d_clusters(dcd),
    )?;

    println!("visualizations written to {}", outdir.display());
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
