//! Creation and extraction of the 29-bit CAN identifiers used by
//! GMLAN (GM single-wire CAN). The extended identifier packs, most
//! significant first: a 3-bit zero pad, a 3-bit priority, a 13-bit
//! arbitration field, and a 13-bit sender field.
use crate::error::IdError;
use embedded_can::ExtendedId;

//==================================================================================GMLAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Encapsulates an extended CAN identifier (29 bits) and exposes accessors
/// for the GMLAN priority, arbitration, and sender sub-fields.
pub struct GmlanId(pub u32);

impl GmlanId {
    /// Wrap a raw identifier after checking the 29-bit extended bound.
    /// Intended for firmware ingress paths; the accessors themselves
    /// stay total and simply mask stray high bits.
    pub fn try_new(raw: u32) -> Result<Self, IdError> {
        if raw > ExtendedId::MAX.as_raw() {
            return Err(IdError::OutOfRange { raw });
        }
        Ok(Self(raw))
    }

    /// Raw 32-bit container value.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.0
    }

    // Getters used to deconstruct the identifier
    /// Returns the priority (3 bits, value 0-7, 0 highest) encoded in the ID.
    pub fn priority(&self) -> u8 {
        ((self.0 >> 26) & 0x07) as u8
    }

    /// Returns the 13-bit arbitration field ranking senders on the bus.
    pub fn arbitration(&self) -> u16 {
        ((self.0 >> 13) & 0x1FFF) as u16
    }

    /// Returns the 13-bit sender field naming the originating control unit.
    pub fn sender(&self) -> u16 {
        (self.0 & 0x1FFF) as u16
    }

    /// Decompose the identifier into its semantic sub-fields.
    pub fn header(&self) -> FrameHeader {
        FrameHeader {
            priority: self.priority(),
            arbitration: self.arbitration(),
            sender: self.sender(),
        }
    }
}

impl From<FrameHeader> for GmlanId {
    fn from(header: FrameHeader) -> Self {
        header.id()
    }
}

//==================================================================================FRAME_HEADER
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Decoded GMLAN header triple.
pub struct FrameHeader {
    /// Message urgency, 3 bits, 0 highest.
    pub priority: u8,
    /// Arbitration field, 13 bits.
    pub arbitration: u16,
    /// Originating control unit, 13 bits.
    pub sender: u16,
}

impl FrameHeader {
    /// Re-pack the triple into a 29-bit identifier.
    ///
    /// Out-of-range fields are silently masked to their bit width, never
    /// rejected; callers must not rely on this to validate ranges. For all
    /// in-range headers, `id().header()` returns the original triple.
    pub fn id(&self) -> GmlanId {
        let raw = ((self.priority as u32 & 0x07) << 26)
            | ((self.arbitration as u32 & 0x1FFF) << 13)
            | (self.sender as u32 & 0x1FFF);
        GmlanId(raw)
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
