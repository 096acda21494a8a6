//! StochasticProcess trait for a unified process interface.
//!
//! A process is described by its drift and diffusion terms; the default
//! [`StochasticProcess::evolve_step`] applies the Euler–Maruyama
//! discretisation
//! ```text
//! x(t+dt) = x(t) + drift(x)*dt + diffusion(x)*sqrt(dt)*z
//! ```
//! where `z` is a standard normal draw. Models with a known exact transition
//! (such as lognormal growth) override `evolve_step` with the exact update
//! while keeping the same call shape.
//!
//! Adding a new process type means supplying a parameter struct plus `drift`
//! and `diffusion`; the simulation loop in `quant_engine` is shared.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: models are zero-sized tag types resolved via
//!   generics, not `Box<dyn Trait>`
//! - **Stateless models**: all inputs arrive through the immutable `Params`
//!   value, so concurrent simulations cannot interfere

use num_traits::Float;

/// Unified trait interface for stochastic process models.
///
/// # Type Parameters
/// * `T` - Floating-point type (`f64` in the engine, `f32` supported)
///
/// # Contract
///
/// Given the current value `x`, a step `dt > 0` and a standard normal draw
/// `z`, `evolve_step` returns the next value. No bounds or clamping are
/// applied to intermediate values: a mean-reverting rate may go negative,
/// which is a valid stochastic outcome rather than an error.
pub trait StochasticProcess<T: Float> {
    /// Model parameters type.
    type Params: Clone;

    /// Starting value `x(0)` for a simulated path.
    fn initial_value(params: &Self::Params) -> T;

    /// Deterministic trend term evaluated at `x`.
    fn drift(params: &Self::Params, x: T) -> T;

    /// Noise scale term evaluated at `x`.
    fn diffusion(params: &Self::Params, x: T) -> T;

    /// Advances the process by one time step.
    ///
    /// The default implementation is the Euler–Maruyama scheme; override it
    /// only when an exact transition density is available.
    #[inline]
    fn evolve_step(x: T, dt: T, z: T, params: &Self::Params) -> T {
        x + Self::drift(params, x) * dt + Self::diffusion(params, x) * dt.sqrt() * z
    }

    /// Process name for logging and debugging.
    fn process_name() -> &'static str;
}
