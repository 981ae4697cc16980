//! In-memory representation of a GMLAN frame as read from the CAN bus.
use crate::gmlan_id::GmlanId;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Raw frame delivered by the bus interface, one per received message.
///
/// Ephemeral by design: the monitor consumes it synchronously and never
/// stores it.
pub struct CanFrame {
    /// Full 29-bit GMLAN identifier stored inside a `u32`.
    pub id: GmlanId,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; 8],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

impl CanFrame {
    /// Build a frame from an identifier and a payload slice.
    /// Payloads longer than eight bytes are truncated to the CAN limit.
    pub fn new(id: GmlanId, payload: &[u8]) -> Self {
        let len = payload.len().min(8);
        let mut data = [0u8; 8];
        data[..len].copy_from_slice(&payload[..len]);
        Self { id, data, len }
    }

    /// Immutable view over the valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }
}
