//! Command-line parsing for the two plotting binaries.

use std::path::PathBuf;

use clap::{command, Arg, ArgAction};

/// Arguments of the `benchplot` binary.
#[derive(Debug)]
pub struct BenchplotArgs {
    pub csv_path: PathBuf,
    /// Highlight estimated points with hollow markers.
    pub overlay: bool,
    /// Prefix for generated output files.
    pub prefix: String,
    pub out_dir: PathBuf,
    /// Also produce the combined three-panel overview figure.
    pub overview: bool,
}

pub fn benchplot_cli() -> BenchplotArgs {
    let matches = command!("benchplot")
        .about("Generate comparison charts from benchmark CSV data.")
        .arg(
            Arg::new("csv_path")
                .help("Path to benchmark_results.csv")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("overlay")
                .help("Highlight estimated points with hollow markers")
                .long("overlay")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prefix")
                .help("Prefix for generated output files")
                .long("prefix")
                .default_value("fig"),
        )
        .arg(
            Arg::new("out-dir")
                .help("Directory to write figures into")
                .long("out-dir")
                .default_value("."),
        )
        .arg(
            Arg::new("overview")
                .help("Produce a combined overview figure with three subplots")
                .long("overview")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    BenchplotArgs {
        csv_path: PathBuf::from(matches.get_one::<String>("csv_path").unwrap()),
        overlay: matches.get_flag("overlay"),
        prefix: matches.get_one::<String>("prefix").unwrap().clone(),
        out_dir: PathBuf::from(matches.get_one::<String>("out-dir").unwrap()),
        overview: matches.get_flag("overview"),
    }
}

/// Arguments of the `mixedplot` binary.
#[derive(Debug)]
pub struct MixedplotArgs {
    pub csv_path: PathBuf,
    pub out_dir: PathBuf,
}

pub fn mixedplot_cli() -> MixedplotArgs {
    let matches = command!("mixedplot")
        .about("Generate bar charts and heatmaps from mixed-operations CSV data.")
        .arg(
            Arg::new("csv_path")
                .help("Path to mixed_ops_results.csv")
                .required(false)
                .default_value("mixed_ops_results.csv")
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .help("Directory to write figures into")
                .long("out-dir")
                .default_value("mix_plots"),
        )
        .get_matches();

    MixedplotArgs {
        csv_path: PathBuf::from(matches.get_one::<String>("csv_path").unwrap()),
        out_dir: PathBuf::from(matches.get_one::<String>("out-dir").unwrap()),
    }
}
