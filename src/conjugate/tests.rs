use super::*;

// ---------------------------------------------------------------------------
// Normal-Normal
// ---------------------------------------------------------------------------

#[test]
fn test_normal_normal_precision_weighted_update() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 2.0).expect("valid observation");

    assert!((model.posterior_variance() - 2.0).abs() < 1e-12);
    assert!((model.posterior_mean() - 7.5).abs() < 1e-12);
    assert!((model.posterior_sd() - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_normal_normal_posterior_precision_adds() {
    let mut model = NormalNormal::new(1.0, 3.0).expect("valid prior parameters");
    model.update(4.0, 1.5).expect("valid observation");

    let expected_precision = 1.0 / 9.0 + 1.0 / 2.25;
    let posterior_precision = 1.0 / model.posterior_variance();
    assert!((posterior_precision - expected_precision).abs() < 1e-9);
}

#[test]
fn test_normal_normal_flat_prior_tracks_likelihood() {
    let mut model = NormalNormal::new(0.0, 1e6).expect("valid prior parameters");
    model.update(5.0, 2.0).expect("valid observation");

    assert!((model.posterior_mean() - 5.0).abs() < 1e-6);
}

#[test]
fn test_normal_normal_flat_likelihood_keeps_prior() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 1e6).expect("valid observation");

    assert!((model.posterior_mean() - 10.0).abs() < 1e-6);
}

#[test]
fn test_normal_normal_posterior_between_prior_and_observation() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 1.0).expect("valid observation");

    let mean = model.posterior_mean();
    assert!(mean > 5.0 && mean < 10.0);
    // The sharper observation pulls harder than the prior
    assert!(mean < 7.5);
}

#[test]
fn test_normal_normal_sequential_updates_accumulate_precision() {
    let mut sequential = NormalNormal::new(0.0, 4.0).expect("valid prior parameters");
    sequential.update(2.0, 2.0).expect("valid observation");
    sequential.update(3.0, 1.0).expect("valid observation");

    let expected_precision = 1.0 / 16.0 + 1.0 / 4.0 + 1.0;
    let expected_mean = (0.0 / 16.0 + 2.0 / 4.0 + 3.0) / expected_precision;
    assert!((1.0 / sequential.posterior_variance() - expected_precision).abs() < 1e-9);
    assert!((sequential.posterior_mean() - expected_mean).abs() < 1e-9);
}

#[test]
fn test_normal_normal_rejects_bad_prior() {
    assert!(NormalNormal::new(0.0, 0.0).is_err());
    assert!(NormalNormal::new(0.0, -1.0).is_err());
    assert!(NormalNormal::new(f64::NAN, 1.0).is_err());
    assert!(NormalNormal::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_normal_normal_rejects_bad_observation() {
    let mut model = NormalNormal::new(0.0, 1.0).expect("valid prior parameters");
    assert!(model.update(1.0, 0.0).is_err());
    assert!(model.update(1.0, -2.0).is_err());
    assert!(model.update(f64::NAN, 1.0).is_err());
    // Failed updates leave the state untouched
    assert_eq!(model.posterior_mean(), 0.0);
    assert_eq!(model.posterior_variance(), 1.0);
}

#[test]
fn test_normal_normal_credible_interval_width() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 2.0).expect("valid observation");

    let (lower, upper) = model.credible_interval(0.95).expect("valid confidence level");
    let sd = 2.0_f64.sqrt();
    assert!((lower - (7.5 - 1.959_963_985 * sd)).abs() < 1e-6);
    assert!((upper - (7.5 + 1.959_963_985 * sd)).abs() < 1e-6);
}

#[test]
fn test_normal_normal_credible_interval_rejects_bad_confidence() {
    let model = NormalNormal::new(0.0, 1.0).expect("valid prior parameters");
    assert!(model.credible_interval(0.0).is_err());
    assert!(model.credible_interval(1.0).is_err());
    assert!(model.credible_interval(-0.1).is_err());
}

#[test]
fn test_normal_normal_posterior_distribution_value() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 2.0).expect("valid observation");

    let posterior = model.posterior();
    assert!((posterior.mean() - 7.5).abs() < 1e-12);
    assert!((posterior.variance() - 2.0).abs() < 1e-12);
}

#[test]
fn test_normal_normal_posterior_predictive_adds_noise() {
    let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    model.update(5.0, 2.0).expect("valid observation");

    let predictive = model.posterior_predictive(2.0).expect("valid noise sd");
    assert!((predictive.mean() - 7.5).abs() < 1e-12);
    // var_post + obs_var = 2 + 4
    assert!((predictive.variance() - 6.0).abs() < 1e-12);

    assert!(model.posterior_predictive(0.0).is_err());
}

// ---------------------------------------------------------------------------
// Beta-Binomial
// ---------------------------------------------------------------------------

#[test]
fn test_beta_binomial_uniform_prior_counts() {
    let mut model = BetaBinomial::uniform();
    model.update(7, 10).expect("successes within trials");

    assert_eq!(model.alpha(), 8.0);
    assert_eq!(model.beta(), 4.0);
    assert!((model.posterior_mean() - 8.0 / 12.0).abs() < 1e-12);
}

#[test]
fn test_beta_binomial_informative_prior() {
    let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
    model.update(8, 20).expect("successes within trials");

    assert_eq!(model.alpha(), 17.0);
    assert_eq!(model.beta(), 21.0);
    assert!((model.posterior_mean() - 17.0 / 38.0).abs() < 1e-12);
}

#[test]
fn test_beta_binomial_laplace_rule() {
    // With the uniform prior, posterior mean is (h+1)/(n+2) exactly
    for &(h, n) in &[(0_u64, 1_u64), (1, 1), (8, 20), (50, 100), (0, 37)] {
        let mut model = BetaBinomial::uniform();
        model.update(h, n).expect("successes within trials");
        #[allow(clippy::cast_precision_loss)]
        let expected = (h as f64 + 1.0) / (n as f64 + 2.0);
        assert!(
            (model.posterior_mean() - expected).abs() < 1e-12,
            "h={h}, n={n}"
        );
    }
}

#[test]
fn test_beta_binomial_mean_between_prior_and_empirical() {
    let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
    let prior_mean = model.posterior_mean();
    model.update(8, 20).expect("successes within trials");

    let empirical = 8.0 / 20.0;
    let mean = model.posterior_mean();
    assert!(mean > empirical && mean < prior_mean);
}

#[test]
fn test_beta_binomial_sequential_updates_match_batch() {
    let mut sequential = BetaBinomial::uniform();
    sequential.update(3, 5).expect("successes within trials");
    sequential.update(4, 15).expect("successes within trials");

    let mut batch = BetaBinomial::uniform();
    batch.update(7, 20).expect("successes within trials");

    assert_eq!(sequential.alpha(), batch.alpha());
    assert_eq!(sequential.beta(), batch.beta());
}

#[test]
fn test_beta_binomial_rejects_successes_above_trials() {
    let mut model = BetaBinomial::uniform();
    assert!(model.update(11, 10).is_err());
    // Failed updates leave the state untouched
    assert_eq!(model.alpha(), 1.0);
    assert_eq!(model.beta(), 1.0);
}

#[test]
fn test_beta_binomial_rejects_bad_shapes() {
    assert!(BetaBinomial::new(0.0, 1.0).is_err());
    assert!(BetaBinomial::new(1.0, 0.0).is_err());
    assert!(BetaBinomial::new(-1.0, 2.0).is_err());
    assert!(BetaBinomial::new(f64::NAN, 2.0).is_err());
}

#[test]
fn test_beta_binomial_mode() {
    let mut model = BetaBinomial::uniform();
    model.update(7, 10).expect("successes within trials");

    // Beta(8, 4): mode = 7/10
    let mode = model.posterior_mode().expect("interior mode exists");
    assert!((mode - 0.7).abs() < 1e-12);

    // Jeffrey's prior with no data has no interior mode
    assert!(BetaBinomial::jeffreys().posterior_mode().is_none());
}

#[test]
fn test_beta_binomial_more_data_shrinks_variance() {
    let mut few = BetaBinomial::uniform();
    few.update(7, 10).expect("successes within trials");

    let mut many = BetaBinomial::uniform();
    many.update(70, 100).expect("successes within trials");

    assert!(many.posterior_variance() < few.posterior_variance());
}

#[test]
fn test_beta_binomial_predictive_equals_mean() {
    let mut model = BetaBinomial::uniform();
    model.update(7, 10).expect("successes within trials");
    assert!((model.posterior_predictive() - model.posterior_mean()).abs() < 1e-12);
}

#[test]
fn test_beta_binomial_credible_interval_inverts_cdf() {
    let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
    model.update(8, 20).expect("successes within trials");

    let (lower, upper) = model.credible_interval(0.95).expect("valid confidence level");
    assert!(lower < model.posterior_mean() && model.posterior_mean() < upper);

    // Interval endpoints sit at the 2.5% and 97.5% quantiles of Beta(17, 21)
    let cdf_lower = crate::special::regularized_incomplete_beta(17.0, 21.0, lower);
    let cdf_upper = crate::special::regularized_incomplete_beta(17.0, 21.0, upper);
    assert!((cdf_lower - 0.025).abs() < 1e-6);
    assert!((cdf_upper - 0.975).abs() < 1e-6);
}

#[test]
fn test_beta_binomial_credible_interval_rejects_bad_confidence() {
    let model = BetaBinomial::uniform();
    assert!(model.credible_interval(0.0).is_err());
    assert!(model.credible_interval(1.0).is_err());
    assert!(model.credible_interval(1.5).is_err());
}

#[test]
fn test_beta_binomial_posterior_distribution_value() {
    let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
    model.update(8, 20).expect("successes within trials");

    let posterior = model.posterior();
    assert!((posterior.mean() - 17.0 / 38.0).abs() < 1e-12);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_normal_normal_precision_adds(
            prior_mean in -50.0..50.0_f64,
            prior_sd in 0.1..10.0_f64,
            obs_mean in -50.0..50.0_f64,
            obs_sd in 0.1..10.0_f64,
        ) {
            let mut model = NormalNormal::new(prior_mean, prior_sd).expect("valid prior");
            model.update(obs_mean, obs_sd).expect("valid observation");

            let expected = 1.0 / (prior_sd * prior_sd) + 1.0 / (obs_sd * obs_sd);
            let actual = 1.0 / model.posterior_variance();
            prop_assert!(
                (actual - expected).abs() < 1e-9 * expected,
                "precision mismatch: actual={}, expected={}",
                actual,
                expected
            );
        }

        #[test]
        fn prop_normal_normal_mean_between_sources(
            prior_mean in -50.0..0.0_f64,
            obs_mean in 1.0..50.0_f64,
            prior_sd in 0.1..10.0_f64,
            obs_sd in 0.1..10.0_f64,
        ) {
            let mut model = NormalNormal::new(prior_mean, prior_sd).expect("valid prior");
            model.update(obs_mean, obs_sd).expect("valid observation");

            let mean = model.posterior_mean();
            prop_assert!(mean > prior_mean && mean < obs_mean);
        }

        #[test]
        fn prop_beta_binomial_mean_in_unit_interval(
            successes in 0..200_u64,
            extra in 0..200_u64,
            alpha in 0.1..20.0_f64,
            beta in 0.1..20.0_f64,
        ) {
            let trials = successes + extra;
            let mut model = BetaBinomial::new(alpha, beta).expect("valid shapes");
            model.update(successes, trials).expect("successes within trials");

            let mean = model.posterior_mean();
            prop_assert!(mean > 0.0 && mean < 1.0);
        }

        #[test]
        fn prop_beta_binomial_credible_interval_ordered(
            successes in 0..100_u64,
            extra in 1..100_u64,
        ) {
            let trials = successes + extra;
            let mut model = BetaBinomial::uniform();
            model.update(successes, trials).expect("successes within trials");

            let (lower, upper) = model.credible_interval(0.9).expect("valid confidence");
            prop_assert!(lower < upper);
            prop_assert!((0.0..=1.0).contains(&lower));
            prop_assert!((0.0..=1.0).contains(&upper));
        }
    }
}
