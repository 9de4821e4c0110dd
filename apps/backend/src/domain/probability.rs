//! Binomial tail probabilities for claim evaluation.
//!
//! Point probabilities come from the saddle-point form (Stirling remainders
//! plus deviance terms), which stays accurate for pools of billions of dice.
//! Tails are summed from the claimed count away from the mode, so terms only
//! shrink and the sum stops once the rest cannot move the result.

use std::f64::consts::PI;

const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// `ln(n!) - ((n + 1/2) ln n - n + ln sqrt(2 pi))` for `n >= 1`.
fn stirling_error(n: f64) -> f64 {
    const S0: f64 = 1.0 / 12.0;
    const S1: f64 = 1.0 / 360.0;
    const S2: f64 = 1.0 / 1260.0;
    const S3: f64 = 1.0 / 1680.0;
    const S4: f64 = 1.0 / 1188.0;

    if n <= 15.0 {
        let ln_factorial: f64 = (2..=n as u32).map(|i| f64::from(i).ln()).sum();
        return ln_factorial - (n + 0.5) * n.ln() + n - LN_SQRT_2PI;
    }

    let nn = n * n;
    if n > 500.0 {
        (S0 - S1 / nn) / n
    } else if n > 80.0 {
        (S0 - (S1 - S2 / nn) / nn) / n
    } else if n > 35.0 {
        (S0 - (S1 - (S2 - S3 / nn) / nn) / nn) / n
    } else {
        (S0 - (S1 - (S2 - (S3 - S4 / nn) / nn) / nn) / nn) / n
    }
}

/// `x ln(x / np) + np - x`, with a series when `x` is close to `np`.
fn deviance(x: f64, np: f64) -> f64 {
    if (x - np).abs() < 0.1 * (x + np) {
        let v = (x - np) / (x + np);
        let v2 = v * v;
        let mut sum = (x - np) * v;
        let mut ej = 2.0 * x * v;
        for j in 1..1000u32 {
            ej *= v2;
            let next = sum + ej / f64::from(2 * j + 1);
            if next == sum {
                break;
            }
            sum = next;
        }
        return sum;
    }
    x * (x / np).ln() + np - x
}

/// Natural log of `P(X = k)` for `X ~ Binomial(n, p)`, `0 < p < 1`.
pub fn ln_binomial_pmf(k: u32, n: u32, p: f64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 {
        return f64::from(n) * (-p).ln_1p();
    }
    if k == n {
        return f64::from(n) * p.ln();
    }

    let (n, k) = (f64::from(n), f64::from(k));
    let rest = n - k;
    stirling_error(n) - stirling_error(k) - stirling_error(rest) - deviance(k, n * p)
        - deviance(rest, n * (1.0 - p))
        + 0.5 * (n / (2.0 * PI * k * rest)).ln()
}

/// Log of a sum of pmf terms that start at `ln_first` and only shrink.
///
/// `ln_ratios` yields `ln(next / current)` for each further term. The ratios
/// fall monotonically away from the mode, so everything after a term with
/// ratio `r` is bounded by `term * r / (1 - r)`.
fn ln_shrinking_sum(ln_first: f64, ln_ratios: impl Iterator<Item = f64>) -> f64 {
    let mut sum: f64 = 1.0;
    let mut ln_rel = 0.0;
    for ln_r in ln_ratios {
        let r = ln_r.exp();
        if r < 1.0 && ln_rel + ln_r - (-r).ln_1p() < sum.ln() + f64::EPSILON.ln() {
            break;
        }
        ln_rel += ln_r;
        sum += ln_rel.exp();
    }
    ln_first + sum.ln()
}

/// Probability of at least `successes` hits among `trials` independent
/// trials that each hit with probability `p`.
///
/// Runs in time proportional to the spread of the distribution, not to
/// `trials`, and allocates nothing.
pub fn binomial_survival(trials: u32, successes: u32, p: f64) -> f64 {
    if successes == 0 {
        return 1.0;
    }
    if successes > trials || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let ln_odds = p.ln() - (-p).ln_1p();
    let n = f64::from(trials);

    if f64::from(successes) > n * p {
        // Upper tail from `successes` upward: P(k + 1) / P(k) = (n - k) / (k + 1) * p / q.
        let ratios = (successes..trials)
            .map(|k| f64::from(trials - k).ln() - f64::from(k + 1).ln() + ln_odds);
        let ln_tail = ln_shrinking_sum(ln_binomial_pmf(successes, trials, p), ratios);
        ln_tail.exp().clamp(0.0, 1.0)
    } else {
        // Complement of the lower tail from `successes - 1` downward:
        // P(k - 1) / P(k) = k / (n - k + 1) * q / p.
        let ratios = (1..successes)
            .rev()
            .map(|k| f64::from(k).ln() - f64::from(trials - k + 1).ln() - ln_odds);
        let ln_below = ln_shrinking_sum(ln_binomial_pmf(successes - 1, trials, p), ratios);
        (-ln_below.exp_m1()).clamp(0.0, 1.0)
    }
}
