//! # pricer_fdm: Explicit Finite-Difference Solver
//!
//! Numerically solves the Black-Scholes PDE for a European option on a
//! commodity whose spot follows geometric Brownian motion with a continuous
//! convenience-yield adjustment.
//!
//! ## Scheme
//!
//! Uniform spatial grid over `[0, S_max]`, terminal payoff at maturity,
//! explicit backward induction in time with Dirichlet-style boundaries at
//! every step:
//!
//! ```text
//! V[i] <- A*V_prev[i-1] + B*V_prev[i] + C*V_prev[i+1]   (interior nodes)
//! V[0]  = 0
//! V[M]  = S_max - K*exp(-r*n*dt)   (call)   |   0   (put)
//! ```
//!
//! The coefficients are computed from the node *index* (`S[i] = i*dS`, so
//! drift and diffusion terms scale as `i` and `i^2`); this algebraic form is
//! kept verbatim to avoid rescaling bugs.
//!
//! ## Stability
//!
//! The scheme is explicit: it is only stable when `dt` is small relative to
//! the spatial resolution (roughly `dt <= 1 / (sigma^2 * M^2)` near the
//! upper boundary). [`solve`] does not guard the recurrence; callers that
//! want fail-fast semantics use [`check_stability`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//! use pricer_fdm::{solve, GridSpec};
//!
//! let grid = GridSpec::new(110.0, 0.5, 100, 1000).unwrap();
//! let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
//!
//! let curve = solve(&grid, &market);
//! assert_eq!(curve.len(), 101);
//! assert_eq!(curve.values()[0], 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod curve;
mod error;
mod grid;
mod solver;

pub use curve::PriceCurve;
pub use error::FdmError;
pub use grid::GridSpec;
pub use solver::{check_stability, solve};
