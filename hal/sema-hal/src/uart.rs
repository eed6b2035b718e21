//! UART peripheral register surface
//!
//! The DV firmware brings a UART instance into a transmit/receive-ready
//! state with a fixed write sequence and pushes bytes into its TX path.
//! Nothing is read back; the testbench, not the firmware, judges whether
//! the configuration took effect.

/// UART peripheral setup parameters
///
/// The enables are sequence steps, not configuration; only the tunable
/// values live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartSetup {
    /// Baud-rate prescaler (divisor applied to the peripheral input clock)
    pub prescaler: u32,
    /// TX FIFO fill level at which the peripheral signals readiness
    pub tx_fifo_threshold: u8,
}

impl Default for UartSetup {
    fn default() -> Self {
        Self {
            // 115200 baud at the bench's reference clock
            prescaler: 42,
            tx_fifo_threshold: 3,
        }
    }
}

/// UART peripheral register surface
///
/// One method per control field. All writes are unconditional; there is no
/// readback or verification path.
pub trait UartDevice {
    /// Enable or disable the peripheral's gated clock
    fn set_clock_enabled(&mut self, enabled: bool);

    /// Enable or disable the peripheral
    fn set_enabled(&mut self, enabled: bool);

    /// Set the baud-rate prescaler
    fn set_prescaler(&mut self, prescaler: u32);

    /// Set the TX FIFO threshold
    fn set_tx_fifo_threshold(&mut self, threshold: u8);

    /// Enable or disable the transmit path
    fn set_tx_enabled(&mut self, enabled: bool);

    /// Enable or disable the receive path
    fn set_rx_enabled(&mut self, enabled: bool);

    /// Hand one byte to the transmit path
    fn write_byte(&mut self, byte: u8);

    /// Hand a byte sequence to the transmit path, in order
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}
