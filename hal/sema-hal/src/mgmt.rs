//! Management subsystem controls
//!
//! Traits for the chip-level control surface the firmware touches during
//! bring-up: the dedicated management GPIO pad, the housekeeping SPI
//! pass-through, and the user-project interface enable.

/// Management GPIO pad
///
/// A dedicated pad owned by the management subsystem. The DV firmware
/// drives it as a synchronization marker: the testbench waits on its
/// high-then-low transitions.
pub trait MgmtGpio {
    /// Enable the pad's output driver
    fn enable_output(&mut self);

    /// Drive the pad high (logic 1)
    fn set_high(&mut self);

    /// Drive the pad low (logic 0)
    fn set_low(&mut self);

    /// Drive the pad to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Housekeeping SPI pass-through control
///
/// The housekeeping SPI shares pads with user I/O; it must be switched off
/// before the user pads are exercised.
pub trait Housekeeping {
    /// Enable or disable the housekeeping SPI pass-through
    fn set_spi_enabled(&mut self, enabled: bool);
}

/// User-project interface enable
///
/// Asserting the enable hands the shared logic-analyzer/wishbone interface
/// over to the user project.
pub trait UserInterface {
    /// Assert the user-project interface enable signal
    fn enable(&mut self);
}
