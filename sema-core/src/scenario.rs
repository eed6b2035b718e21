//! End-to-end DV test scenarios
//!
//! One function per testbench test case. The binaries in `sema-firmware`
//! are thin wrappers around these, so the full sequences are exercisable
//! against recording mocks on the host.

use sema_hal::{Housekeeping, MgmtGpio, UartDevice, UartSetup, UserInterface, UserPinBank};

use crate::bringup::bring_up;
use crate::pulse::sync_pulse;
use crate::uart;

/// Greeting emitted by the uart0 scenario, newline-terminated for the
/// bench-side line reader
pub const UART0_GREETING: &[u8] = b"Hello UART0\n";

/// Power-on bring-up check: configure the I/O, raise one sync marker.
pub fn basic(
    mgmt: &mut impl MgmtGpio,
    housekeeping: &mut impl Housekeeping,
    pins: &mut impl UserPinBank,
    user: &mut impl UserInterface,
) {
    bring_up(mgmt, housekeeping, pins, user);
    sync_pulse(mgmt, 1);
}

/// UART0 exercise: bring-up, configure UART0, transmit the greeting.
///
/// A sync marker follows each stage so the bench can attribute failures:
/// pulse 1 = configuration complete, pulse 2 = UART0 enabled,
/// pulse 3 = transmission handed off.
pub fn uart0(
    mgmt: &mut impl MgmtGpio,
    housekeeping: &mut impl Housekeeping,
    pins: &mut impl UserPinBank,
    user: &mut impl UserInterface,
    uart0: &mut impl UartDevice,
    setup: &UartSetup,
) {
    bring_up(mgmt, housekeeping, pins, user);
    sync_pulse(mgmt, 1);

    uart::configure(uart0, setup);
    sync_pulse(mgmt, 1);

    uart::transmit(uart0, UART0_GREETING);
    sync_pulse(mgmt, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;
    use sema_hal::PinMode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        OutputEnable,
        Level(bool),
        SpiEnabled(bool),
        Configure(u8, PinMode),
        Commit,
        UserEnable,
        ClockEnabled(bool),
        Enabled(bool),
        Prescaler(u32),
        TxFifoThreshold(u8),
        TxEnabled(bool),
        RxEnabled(bool),
        Byte(u8),
    }

    /// Shared log: one totally ordered record of everything the scenario
    /// did, across all devices
    struct Log(RefCell<Vec<Event, 64>>);

    impl Log {
        fn new() -> Self {
            Self(RefCell::new(Vec::new()))
        }

        fn push(&self, event: Event) {
            self.0.borrow_mut().push(event).unwrap();
        }
    }

    struct Mgmt<'a>(&'a Log);

    impl MgmtGpio for Mgmt<'_> {
        fn enable_output(&mut self) {
            self.0.push(Event::OutputEnable);
        }

        fn set_high(&mut self) {
            self.0.push(Event::Level(true));
        }

        fn set_low(&mut self) {
            self.0.push(Event::Level(false));
        }
    }

    struct Hk<'a>(&'a Log);

    impl Housekeeping for Hk<'_> {
        fn set_spi_enabled(&mut self, enabled: bool) {
            self.0.push(Event::SpiEnabled(enabled));
        }
    }

    struct Pins<'a>(&'a Log);

    impl UserPinBank for Pins<'_> {
        fn configure(&mut self, pin: u8, mode: PinMode) {
            self.0.push(Event::Configure(pin, mode));
        }

        fn commit(&mut self) {
            self.0.push(Event::Commit);
        }
    }

    struct User<'a>(&'a Log);

    impl UserInterface for User<'_> {
        fn enable(&mut self) {
            self.0.push(Event::UserEnable);
        }
    }

    struct Uart<'a>(&'a Log);

    impl UartDevice for Uart<'_> {
        fn set_clock_enabled(&mut self, enabled: bool) {
            self.0.push(Event::ClockEnabled(enabled));
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.0.push(Event::Enabled(enabled));
        }

        fn set_prescaler(&mut self, prescaler: u32) {
            self.0.push(Event::Prescaler(prescaler));
        }

        fn set_tx_fifo_threshold(&mut self, threshold: u8) {
            self.0.push(Event::TxFifoThreshold(threshold));
        }

        fn set_tx_enabled(&mut self, enabled: bool) {
            self.0.push(Event::TxEnabled(enabled));
        }

        fn set_rx_enabled(&mut self, enabled: bool) {
            self.0.push(Event::RxEnabled(enabled));
        }

        fn write_byte(&mut self, byte: u8) {
            self.0.push(Event::Byte(byte));
        }
    }

    /// Count complete high-then-low marker pairs among the level writes
    /// after bring-up parks the pad low
    fn pulses(events: &[Event]) -> usize {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Level(high) => Some(*high),
                _ => None,
            })
            .skip(1) // bring-up's initial park-low write
            .collect::<Vec<bool, 16>>()
            .chunks(2)
            .filter(|c| c == &[true, false])
            .count()
    }

    #[test]
    fn test_basic_one_pulse_no_uart() {
        let log = Log::new();
        basic(&mut Mgmt(&log), &mut Hk(&log), &mut Pins(&log), &mut User(&log));

        let events = log.0.borrow();
        assert_eq!(pulses(&events), 1);
        assert!(!events.iter().any(|e| matches!(
            e,
            Event::ClockEnabled(_) | Event::Enabled(_) | Event::Byte(_)
        )));
        // Bring-up completed before the marker
        let user_at = events.iter().position(|e| *e == Event::UserEnable).unwrap();
        let first_high = events.iter().position(|e| *e == Event::Level(true)).unwrap();
        assert!(user_at < first_high);
    }

    #[test]
    fn test_uart0_full_sequence() {
        let log = Log::new();
        uart0(
            &mut Mgmt(&log),
            &mut Hk(&log),
            &mut Pins(&log),
            &mut User(&log),
            &mut Uart(&log),
            &UartSetup::default(),
        );

        let events = log.0.borrow();
        assert_eq!(pulses(&events), 3);

        // Stage boundaries: config writes between pulse 1 and 2, data
        // bytes between pulse 2 and 3
        let highs: Vec<usize, 8> = events
            .iter()
            .enumerate()
            .filter_map(|(i, e)| (*e == Event::Level(true)).then_some(i))
            .collect();
        assert_eq!(highs.len(), 3);

        let clock_at = events
            .iter()
            .position(|e| *e == Event::ClockEnabled(true))
            .unwrap();
        let rx_at = events.iter().position(|e| *e == Event::RxEnabled(true)).unwrap();
        let first_byte = events.iter().position(|e| matches!(e, Event::Byte(_))).unwrap();
        let last_byte = events.iter().rposition(|e| matches!(e, Event::Byte(_))).unwrap();

        assert!(highs[0] < clock_at && rx_at < highs[1]);
        assert!(highs[1] < first_byte && last_byte < highs[2]);
    }

    #[test]
    fn test_uart0_configuration_values() {
        let log = Log::new();
        uart0(
            &mut Mgmt(&log),
            &mut Hk(&log),
            &mut Pins(&log),
            &mut User(&log),
            &mut Uart(&log),
            &UartSetup::default(),
        );

        let events = log.0.borrow();
        let config: Vec<Event, 8> = events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    Event::ClockEnabled(_)
                        | Event::Enabled(_)
                        | Event::Prescaler(_)
                        | Event::TxFifoThreshold(_)
                        | Event::TxEnabled(_)
                        | Event::RxEnabled(_)
                )
            })
            .copied()
            .collect();

        assert_eq!(
            config.as_slice(),
            &[
                Event::ClockEnabled(true),
                Event::Enabled(true),
                Event::Prescaler(42),
                Event::TxFifoThreshold(3),
                Event::TxEnabled(true),
                Event::RxEnabled(true),
            ]
        );
    }

    #[test]
    fn test_uart0_greeting_bytes() {
        let log = Log::new();
        uart0(
            &mut Mgmt(&log),
            &mut Hk(&log),
            &mut Pins(&log),
            &mut User(&log),
            &mut Uart(&log),
            &UartSetup::default(),
        );

        let events = log.0.borrow();
        let sent: Vec<u8, 16> = events
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect();

        assert_eq!(sent.as_slice(), b"Hello UART0\n");
        assert_eq!(sent.len(), 12);
    }
}
