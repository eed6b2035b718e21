//! User pad configuration
//!
//! The user-facing pads are configured through a staged interface: modes
//! are written per pin, then a single commit shifts the whole configuration
//! into the pad ring at once.

/// Mode of a user-facing pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input with the weak pull-up enabled
    InputPullUp,
    /// Push-pull output
    Output,
}

/// Staged user pad configuration
///
/// Implementations accumulate `configure` calls and apply them atomically
/// on `commit`. Pin state before the first commit is undefined.
pub trait UserPinBank {
    /// Stage a mode for one pin; takes effect at the next [`commit`](Self::commit)
    fn configure(&mut self, pin: u8, mode: PinMode);

    /// Commit all staged pin modes atomically
    ///
    /// Returns once the configuration has been applied to the pad ring.
    fn commit(&mut self);
}
