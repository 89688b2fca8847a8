//! Simulate command: fit an AR model and write the estimated series.

use anyhow::{Context, Result};
use lagstat_ar::{ArConfig, ArFit, ArSpec};
use lagstat_series::Series;
use ndarray::Axis;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use crate::cli::SimulateArgs;
use crate::config::LagstatConfig;
use crate::convert;
use crate::series_io;

/// Run the AR estimation pipeline.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();
    let config = LagstatConfig::load(args.config.as_deref())?;

    // CLI flags override [ar]
    let mut ar_toml = config.ar;
    if let Some(order) = args.order {
        ar_toml.order = order;
    }
    if let Some(length) = args.length {
        ar_toml.length = length;
    }
    if args.seed.is_some() {
        ar_toml.seed = args.seed;
    }
    let ar_cfg = convert::build_ar_config(&ar_toml)?;

    let series = series_io::read_series(&args.input)?;
    let fit = ArSpec::new(ar_cfg.order())
        .fit(&series)
        .with_context(|| format!("AR({}) fit failed", ar_cfg.order()))?;
    info!(
        coefficients = ?fit.coefficients(),
        sigma2 = fit.sigma2(),
        "AR model fitted"
    );

    let contents = match args.paths {
        None => {
            let estimated = estimate(&fit, &ar_cfg)?;
            series_io::format_columns(&[&estimated])
        }
        Some(n_sim) => {
            let mut rng = match ar_toml.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let paths = simulate_paths(&fit, ar_cfg.length(), n_sim, &mut rng);
            let columns: Vec<&Series> = paths.iter().collect();
            series_io::format_columns(&columns)
        }
    };
    series_io::write_output(args.output.as_deref(), &contents)
}

fn estimate(fit: &ArFit, cfg: &ArConfig) -> Result<Series> {
    fit.estimate(cfg.length(), &cfg.innovations())
        .context("AR estimation failed")
}

/// Splits the `(n, n_sim)` simulation matrix into one series per path.
fn simulate_paths(fit: &ArFit, n: usize, n_sim: usize, rng: &mut StdRng) -> Vec<Series> {
    let matrix = fit.simulate(n, n_sim, rng);
    info!(n, n_sim, "paths simulated");
    matrix
        .axis_iter(Axis(1))
        .map(|column| column.iter().map(|&x| Some(x)).collect())
        .collect()
}
