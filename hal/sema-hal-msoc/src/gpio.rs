//! User pad bank
//!
//! Each user pad has one mode register. Mode writes only stage the
//! configuration; a write to the transfer register shifts the staged
//! values into the pad ring, and hardware clears the bit when the shift
//! completes.

use sema_hal::{PinMode, UserPinBank};

use crate::reg;

const PAD_CFG_BASE: u32 = 0x2600_0000;
/// Serial transfer trigger; hardware clears it when the shift completes
const PAD_XFER: u32 = 0x2600_00F8;

// Pad mode register bits
/// Output driver enable
const PAD_OE: u32 = 1 << 0;
/// Input buffer enable
const PAD_IE: u32 = 1 << 1;
/// Weak pull-up select
const PAD_PULL_UP: u32 = 1 << 2;

fn mode_bits(mode: PinMode) -> u32 {
    match mode {
        PinMode::InputPullUp => PAD_IE | PAD_PULL_UP,
        PinMode::Output => PAD_OE,
    }
}

fn pad_cfg_addr(pin: u8) -> u32 {
    PAD_CFG_BASE + 4 * pin as u32
}

/// User pad bank handle
pub struct PinBank {
    _priv: (),
}

impl PinBank {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl UserPinBank for PinBank {
    fn configure(&mut self, pin: u8, mode: PinMode) {
        reg::write(pad_cfg_addr(pin), mode_bits(mode));
    }

    fn commit(&mut self) {
        reg::write(PAD_XFER, 1);
        while reg::read(PAD_XFER) != 0 {}
    }
}
