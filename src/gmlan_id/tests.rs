//! Unit tests for the `GmlanId` accessors and header packing.
use super::*;

//==================================================================================GMLAN_ID
#[test]
/// Extracts the sender field from the raw ID.
fn test_sender() {
    let id = GmlanId(0x0E48_4ABC);
    assert_eq!(id.sender(), 0x0ABC);
}

#[test]
/// Verifies extraction of the 3-bit priority field.
fn test_priority() {
    let id = GmlanId(0x0E48_4ABC);
    assert_eq!(id.priority(), 0b011);
}

#[test]
/// Extracts the 13-bit arbitration field.
fn test_arbitration() {
    let id = GmlanId(0x0E48_4ABC);
    assert_eq!(id.arbitration(), 0x1242);
}

#[test]
/// Bits above position 28 are treated as pad and ignored by the accessors.
fn test_pad_bits_ignored() {
    let low = GmlanId(0x0E48_4ABC);
    let high = GmlanId(0xEE48_4ABC);
    assert_eq!(low.header(), high.header());
}

#[test]
/// `try_new` accepts the extended range and rejects anything above it.
fn test_try_new_bounds() {
    assert_eq!(GmlanId::try_new(0x1FFF_FFFF), Ok(GmlanId(0x1FFF_FFFF)));
    assert_eq!(
        GmlanId::try_new(0x2000_0000),
        Err(IdError::OutOfRange { raw: 0x2000_0000 })
    );
}

//==================================================================================FRAME_HEADER
#[test]
/// Literal vector: {3, 4660, 2748} packs to 239504060 and back.
fn test_known_vector() {
    let header = FrameHeader {
        priority: 3,
        arbitration: 4660,
        sender: 2748,
    };
    assert_eq!(header.id().raw(), 239_504_060);
    assert_eq!(GmlanId(239_504_060).header(), header);
}

#[test]
/// Round-trip law over sampled in-range field values.
fn test_header_round_trip() {
    let arbitrations: [u16; 4] = [0, 1, 0x0AAA, 0x1FFF];
    let senders: [u16; 4] = [0, 1, 0x1555, 0x1FFF];
    for priority in 0..=7u8 {
        for &arbitration in &arbitrations {
            for &sender in &senders {
                let header = FrameHeader {
                    priority,
                    arbitration,
                    sender,
                };
                assert_eq!(header.id().header(), header);
            }
        }
    }
}

#[test]
/// Out-of-range fields must be masked to their bit width, not rejected.
fn test_packing_masks_extra_bits() {
    let header = FrameHeader {
        priority: 0xFF,
        arbitration: 0xFFFF,
        sender: 0xFFFF,
    };
    let id = header.id();
    // Nothing may leak into the 3-bit pad above position 28.
    assert_eq!(id.raw() >> 29, 0);
    assert_eq!(id.priority(), 0x07);
    assert_eq!(id.arbitration(), 0x1FFF);
    assert_eq!(id.sender(), 0x1FFF);
}
