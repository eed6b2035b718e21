//! Bring-up sequencer
//!
//! Puts the management and user I/O into a known state before any
//! peripheral test runs. The order is load-bearing: the testbench relies
//! on every register write happening in program order, and the pad modes
//! must be committed before anything depends on pin state.

use sema_hal::{Housekeeping, MgmtGpio, PinMode, UserInterface, UserPinBank};

/// UART0 receive pad (chip side)
pub const UART0_RX_PIN: u8 = 6;
/// UART0 transmit pad (chip side)
pub const UART0_TX_PIN: u8 = 7;
/// UART1 receive pad (chip side)
pub const UART1_RX_PIN: u8 = 8;
/// UART1 transmit pad (chip side)
pub const UART1_TX_PIN: u8 = 9;

/// Pad modes staged during bring-up and committed in one transfer
pub const PIN_TABLE: [(u8, PinMode); 4] = [
    (UART0_RX_PIN, PinMode::InputPullUp),
    (UART0_TX_PIN, PinMode::Output),
    (UART1_RX_PIN, PinMode::InputPullUp),
    (UART1_TX_PIN, PinMode::Output),
];

/// Run the bring-up sequence.
///
/// In order: enable the management pad's output driver, park it low,
/// disconnect the housekeeping SPI from the shared pads, stage the four
/// user pad modes, commit them in a single transfer, then hand the
/// interface to the user project.
pub fn bring_up(
    mgmt: &mut impl MgmtGpio,
    housekeeping: &mut impl Housekeeping,
    pins: &mut impl UserPinBank,
    user: &mut impl UserInterface,
) {
    mgmt.enable_output();
    mgmt.set_low();
    housekeeping.set_spi_enabled(false);

    for (pin, mode) in PIN_TABLE {
        pins.configure(pin, mode);
    }
    pins.commit();

    user.enable();
}
