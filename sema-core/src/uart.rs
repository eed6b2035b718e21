//! UART configuration and transmit sequences
//!
//! Brings one UART instance into a transmit/receive-ready state and hands
//! bytes to its TX path. All writes are fire-and-forget: the testbench
//! decodes the TX pad to judge whether the configuration took effect.

use sema_hal::{UartDevice, UartSetup};

/// Configure a UART instance.
///
/// Write order is fixed: gated clock, peripheral enable, prescaler,
/// TX FIFO threshold, TX enable, RX enable.
pub fn configure(uart: &mut impl UartDevice, setup: &UartSetup) {
    uart.set_clock_enabled(true);
    uart.set_enabled(true);
    uart.set_prescaler(setup.prescaler);
    uart.set_tx_fifo_threshold(setup.tx_fifo_threshold);
    uart.set_tx_enabled(true);
    uart.set_rx_enabled(true);
}

/// Hand a byte sequence to the UART's transmit path.
///
/// Completes once every byte has been handed over; FIFO draining is the
/// peripheral's business.
pub fn transmit(uart: &mut impl UartDevice, bytes: &[u8]) {
    uart.write_bytes(bytes);
}
