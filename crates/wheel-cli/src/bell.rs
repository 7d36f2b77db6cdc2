//! Terminal bell feedback for spins.

use std::io::{self, Write};

use wheel_core::{NotifyResult, SpinNotifier, SpinOutcome};

const BELL: &[u8] = b"\x07";

/// Rings the terminal bell on every tick and twice when the wheel stops.
pub struct BellNotifier<W: Write = io::Stderr> {
    out: W,
}

impl BellNotifier {
    /// A bell that rings on standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> BellNotifier<W> {
    /// A bell that writes to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) -> NotifyResult<()> {
        for _ in 0..times {
            self.out.write_all(BELL)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SpinNotifier for BellNotifier<W> {
    fn tick(&mut self) -> NotifyResult<()> {
        self.ring(1)
    }

    fn complete(&mut self, _outcome: &SpinOutcome) -> NotifyResult<()> {
        self.ring(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_core::Entry;

    #[test]
    fn rings_per_event() {
        let mut bell = BellNotifier::new(Vec::new());
        bell.tick_start().unwrap();
        bell.tick().unwrap();
        bell.tick().unwrap();
        bell.tick_stop().unwrap();
        bell.complete(&SpinOutcome {
            winning_index: 0,
            entry: Entry::new("A"),
        })
        .unwrap();
        assert_eq!(bell.out, b"\x07\x07\x07\x07".to_vec());
    }
}
