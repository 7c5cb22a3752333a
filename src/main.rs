use clap::Parser;
use color_eyre::eyre::WrapErr;
use montepi::consts::{DEFAULT_FROM, DEFAULT_LAST, DEFAULT_STEP};
use montepi::logging::init_logging;
use montepi::plot::{Plotter, RenderError};
use montepi::sampler::generate;
use montepi::sweep::{sweep, SweepConfig};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::f64::consts::PI;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "montepi")]
#[command(about = "Estimate π by sampling points in the unit square")]
struct Args {
    /// First sample size
    #[arg(long, default_value_t = DEFAULT_FROM)]
    from: usize,

    /// Last sample size (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST)]
    to: usize,

    /// Increment between sample sizes
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: usize,

    /// Seed for a reproducible run (default: seeded from OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Also plot histograms of one set of `from` points
    #[arg(long)]
    show_distribution: bool,

    /// Directory the SVG plots are written to
    #[arg(short, long, default_value = "plots")]
    output_dir: PathBuf,

    /// Write the sweep result as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn report(plot: Result<PathBuf, RenderError>) {
    match plot {
        Ok(path) => tracing::info!(path = %path.display(), "plot written"),
        Err(err) => tracing::warn!("plot skipped: {err}"),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = SweepConfig::inclusive(args.from, args.to, args.step)?;
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    };

    tracing::info!(
        from = config.from(),
        last = config.last(),
        step = config.step(),
        seed = ?args.seed,
        "starting sweep"
    );

    let result = sweep(&config, &mut rng)?;

    println!("{:>12}  {:>10}  {:>10}", "n", "π_est", "|π - π_est|");
    for (n, est) in result.iter() {
        println!("{:>12}  {:>10.6}  {:>10.6}", n, est, (PI - est).abs());
    }
    if let Some(rms) = result.rms_error() {
        println!("rms error: {:.6}", rms);
    }

    if let Some(path) = &args.json {
        let file = std::fs::File::create(path)
            .wrap_err_with(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &result)?;
        tracing::info!(path = %path.display(), "sweep result written");
    }

    let plotter = Plotter::new(&args.output_dir);
    report(plotter.convergence(&result));
    report(plotter.error(&result));

    if args.show_distribution {
        let points = generate(config.from(), &mut rng);
        report(plotter.marginals(&points));
        report(plotter.density(&points));
    }

    Ok(())
}
