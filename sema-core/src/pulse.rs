//! Sync-pulse marker primitive
//!
//! The testbench synchronizes on high-then-low transitions of the
//! management pad. Timing is governed by the simulation clock, so there is
//! no delay between edges; the pulse count alone carries the information.

use sema_hal::MgmtGpio;

/// Raise the management pad high then low, `count` times.
///
/// The pad is never left high on return. A count of zero touches nothing.
pub fn sync_pulse(mgmt: &mut impl MgmtGpio, count: u32) {
    for _ in 0..count {
        mgmt.set_high();
        mgmt.set_low();
    }
}
