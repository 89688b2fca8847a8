//! Fit and estimate round trips for lagstat-ar.

use lagstat_ar::{ArConfig, ArSpec, Innovations, ar};
use lagstat_correlation::{AcvfOptions, acvf_to_lag, levinson_durbin};
use lagstat_series::Series;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

fn generate_ar(phi: &[f64], n: usize, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut data = vec![0.0; n];
    for t in 0..n {
        let mut v = normal.sample(&mut rng);
        for (j, p) in phi.iter().enumerate() {
            if t > j {
                v += p * data[t - 1 - j];
            }
        }
        data[t] = v;
    }
    Series::from(data)
}

#[test]
fn ar1_recovery() {
    let s = generate_ar(&[0.7], 3000, 100);
    let fit = ArSpec::new(1).fit(&s).unwrap();
    assert!(
        (fit.coefficients()[0] - 0.7).abs() < 0.1,
        "phi = {}",
        fit.coefficients()[0]
    );
    assert!(fit.sigma2() > 0.8 && fit.sigma2() < 1.2, "sigma2 = {}", fit.sigma2());
}

#[test]
fn ar2_recovery() {
    let s = generate_ar(&[0.5, 0.3], 4000, 200);
    let fit = ArSpec::new(2).fit(&s).unwrap();
    assert!((fit.coefficients()[0] - 0.5).abs() < 0.1);
    assert!((fit.coefficients()[1] - 0.3).abs() < 0.1);
}

#[test]
fn coefficients_match_levinson_durbin() {
    let s = generate_ar(&[0.4, -0.2], 500, 300);
    let gamma = acvf_to_lag(&s, 3, AcvfOptions::default()).unwrap();
    let ld = levinson_durbin(&gamma, 3).unwrap();
    let fit = ArSpec::new(3).fit(&s).unwrap();
    assert_eq!(fit.coefficients(), ld.coefficients());
    assert_eq!(fit.sigma2(), ld.sigma2());
}

#[test]
fn zero_innovation_estimate_decays_to_mean() {
    let s = generate_ar(&[0.6], 500, 400);
    let fit = ArSpec::new(1).fit(&s).unwrap();
    let est = fit.estimate(300, &Innovations::Zero).unwrap();
    let last = est.get(299).unwrap();
    assert!((last - fit.mean()).abs() < 1e-9, "last = {last}");
}

#[test]
fn gaussian_estimate_refits_close() {
    let s = generate_ar(&[0.6], 2000, 500);
    let config = ArConfig::new()
        .with_length(5000)
        .with_innovations(Innovations::Gaussian { seed: 9 });
    let est = ar(&s, &config).unwrap();
    let refit = ArSpec::new(1).fit(&est).unwrap();
    assert!(
        (refit.coefficients()[0] - 0.6).abs() < 0.1,
        "refit phi = {}",
        refit.coefficients()[0]
    );
}

#[test]
fn simulate_then_fit_round_trip() {
    let s = generate_ar(&[0.5], 2000, 600);
    let fit = ArSpec::new(1).fit(&s).unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let paths = fit.simulate(3000, 2, &mut rng);
    for col in paths.columns() {
        let sim = Series::from(col.to_vec());
        let refit = ArSpec::new(1).fit(&sim).unwrap();
        assert!((refit.coefficients()[0] - fit.coefficients()[0]).abs() < 0.1);
    }
}
