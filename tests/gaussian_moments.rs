use walk_sim_rs::gaussian::sample;
use walk_sim_rs::rng::{PseudoRng, SobolRng};

fn moments(draws: &[f64]) -> (f64, f64) {
    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

#[test]
fn pseudo_draws_match_requested_moments() {
    let n = 100_000;
    let mean = 3.0;
    let variance = 2.5;
    let mut rng = PseudoRng::new(12345);
    let draws: Vec<f64> = (0..n).map(|_| sample(mean, variance, &mut rng).unwrap()).collect();
    let (m, v) = moments(&draws);

    // Five standard errors on the mean; variance within 3%.
    let se = (variance / n as f64).sqrt();
    assert!((m - mean).abs() < 5.0 * se, "mean {m} vs {mean}");
    assert!((v - variance).abs() / variance < 0.03, "variance {v} vs {variance}");
}

#[test]
fn sobol_draws_match_requested_moments() {
    let n = 50_000;
    // One two-dimensional point per deviate.
    let mut rng = SobolRng::new(2, 7);
    let draws: Vec<f64> = (0..n)
        .map(|_| {
            let x = sample(-1.0, 0.25, &mut rng).unwrap();
            rng.next_path();
            x
        })
        .collect();
    let (m, v) = moments(&draws);
    assert!((m + 1.0).abs() < 0.01, "mean {m}");
    assert!((v - 0.25).abs() / 0.25 < 0.05, "variance {v}");
}

#[test]
fn tails_are_symmetric() {
    let n = 50_000;
    let mut rng = PseudoRng::new(8);
    let above = (0..n)
        .filter(|_| sample(0.0, 1.0, &mut rng).unwrap() > 1.0)
        .count() as f64
        / n as f64;
    // P(Z > 1) = 0.1587
    assert!((above - 0.1587).abs() < 0.01, "upper tail {above}");
}
