//! Terminal payoff functions.

/// Payoff applied to the terminal value of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payoff {
    /// European call: `max(0, S_T - strike)`.
    Call {
        /// Strike price.
        strike: f64,
    },
    /// European put: `max(0, strike - S_T)`.
    Put {
        /// Strike price.
        strike: f64,
    },
    /// The raw terminal value itself (price forecast).
    Terminal,
}

impl Payoff {
    /// Convenience constructor for a call payoff.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::Call { strike }
    }

    /// Convenience constructor for a put payoff.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::Put { strike }
    }

    /// Evaluates the payoff at a terminal value.
    #[inline]
    pub fn value(&self, terminal: f64) -> f64 {
        match *self {
            Payoff::Call { strike } => (terminal - strike).max(0.0),
            Payoff::Put { strike } => (strike - terminal).max(0.0),
            Payoff::Terminal => terminal,
        }
    }
}
