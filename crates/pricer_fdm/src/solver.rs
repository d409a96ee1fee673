//! Explicit backward-induction time stepper.

use pricer_core::types::{MarketParams, OptionType};
use tracing::warn;

use crate::curve::PriceCurve;
use crate::error::FdmError;
use crate::grid::GridSpec;

/// Solves the Black-Scholes PDE over the grid by explicit finite
/// differences, returning the option value curve at time zero.
///
/// The value vector starts as the terminal payoff and is stepped backward
/// `N` times. Each step reads only the previous step's snapshot when
/// writing interior nodes; updating in place without the snapshot would
/// corrupt the three-point stencil. Boundary nodes are pinned after every
/// step: `V[0] = 0` for both payoff types (exact for the call, a documented
/// approximation for the put), and the upper node follows the
/// deep-in-the-money asymptote for calls or stays at zero for puts.
///
/// The function is pure: same inputs always produce the same output, and
/// no state is shared across invocations.
///
/// Stability is the caller's responsibility. When the time step violates
/// the explicit-scheme bound the recurrence will oscillate and diverge;
/// this is only reported through a `tracing` warning here, see
/// [`check_stability`] for the fail-fast variant.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_fdm::{solve, GridSpec};
///
/// let grid = GridSpec::new(110.0, 0.5, 100, 1000).unwrap();
/// let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
///
/// let curve = solve(&grid, &market);
/// // Call value is non-decreasing in the spot
/// assert!(curve.values().windows(2).all(|w| w[1] >= w[0] - 1e-9));
/// ```
pub fn solve(grid: &GridSpec, market: &MarketParams) -> PriceCurve {
    if !grid.is_stable(market.volatility, market.rate) {
        warn!(
            dt = grid.dt(),
            limit = grid.stability_limit(market.volatility, market.rate),
            "time step exceeds explicit-scheme stability bound; output may diverge"
        );
    }

    let spots = grid.axis();
    let mut values: Vec<f64> = spots
        .iter()
        .map(|&s| market.option_type.terminal_payoff(s, market.strike))
        .collect();

    let m = grid.num_space_steps();
    let dt = grid.dt();
    let mut prev = values.clone();

    for n in 0..grid.num_time_steps() {
        prev.copy_from_slice(&values);
        step_interior(&mut values, &prev, dt, market);

        // Boundary conditions for this step
        values[0] = 0.0;
        values[m] = match market.option_type {
            OptionType::Call => {
                grid.s_max() - market.strike * (-market.rate * n as f64 * dt).exp()
            }
            OptionType::Put => 0.0,
        };
    }

    PriceCurve::new(spots, values)
}

/// One explicit update of the interior nodes from the previous-step
/// snapshot.
///
/// Coefficients are computed from the node index, not the absolute price:
/// with `S[i] = i*dS` the convection term scales as `i` and the diffusion
/// term as `i^2`, and `dS` cancels out of the recurrence entirely.
fn step_interior(values: &mut [f64], prev: &[f64], dt: f64, market: &MarketParams) {
    let sigma2 = market.volatility * market.volatility;
    let rate = market.rate;
    let drift_rate = market.net_drift();
    let m = prev.len() - 1;

    let update = |i: usize| {
        let idx = i as f64;
        let drift = drift_rate * idx;
        let diffusion = 0.5 * sigma2 * idx * idx;

        let down = dt * (diffusion - drift) / 2.0;
        let centre = 1.0 - dt * (sigma2 * idx * idx + rate);
        let up = dt * (diffusion + drift) / 2.0;

        down * prev[i - 1] + centre * prev[i] + up * prev[i + 1]
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        values[1..m]
            .par_iter_mut()
            .enumerate()
            .for_each(|(offset, v)| *v = update(offset + 1));
    }

    #[cfg(not(feature = "parallel"))]
    for (offset, v) in values[1..m].iter_mut().enumerate() {
        *v = update(offset + 1);
    }
}

/// Fail-fast stability diagnostic.
///
/// Returns [`FdmError::Unstable`] when the grid's time step exceeds the
/// approximate explicit-scheme ceiling for the given market parameters.
/// [`solve`] itself never performs this check; divergent output for an
/// unstable grid is the reference behavior.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_fdm::{check_stability, GridSpec};
///
/// let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
///
/// let fine = GridSpec::new(110.0, 0.5, 100, 1000).unwrap();
/// assert!(check_stability(&fine, &market).is_ok());
///
/// let coarse = GridSpec::new(110.0, 0.5, 100, 100).unwrap();
/// assert!(check_stability(&coarse, &market).is_err());
/// ```
pub fn check_stability(grid: &GridSpec, market: &MarketParams) -> Result<(), FdmError> {
    let limit = grid.stability_limit(market.volatility, market.rate);
    let dt = grid.dt();
    if dt > limit {
        return Err(FdmError::Unstable { dt, limit });
    }
    Ok(())
}
