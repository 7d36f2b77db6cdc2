//! Tunable settings for a wheel.

/// Configuration for a wheel.
#[derive(Debug, Clone)]
pub struct WheelConfig {
    /// Full extra turns added to every spin for visual effect.
    pub spins: u32,
    /// How long a spin animates before its outcome is emitted, in milliseconds.
    pub duration_ms: u64,
    /// RNG seed for reproducible random picks. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spins: 6,
            duration_ms: 4800,
            seed: None,
        }
    }
}

impl WheelConfig {
    /// Set the number of extra full turns per spin.
    pub fn with_spins(mut self, spins: u32) -> Self {
        self.spins = spins;
        self
    }

    /// Set the spin duration (at least 1 ms).
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
