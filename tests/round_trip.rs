//! Encoder/decoder integration: round trips, table synchronization,
//! the cookie policy, size-update flow, and error paths.

use hpack2::{Decoder, DynamicTable, Encoder, HeaderField, HpackError};

fn field(name: &'static str, value: &'static str) -> HeaderField {
    HeaderField::new(name, value)
}

fn tables_match(a: &DynamicTable, b: &DynamicTable) -> bool {
    a.capacity() == b.capacity()
        && a.size() == b.size()
        && a.iter().eq(b.iter())
}

#[test]
fn empty_block_round_trip() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    let block = encoder.encode(&[]);
    assert!(block.is_empty());
    assert!(decoder.decode(&block).unwrap().is_empty());
}

#[test]
fn state_stays_synchronized_across_blocks() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    let blocks = [
        vec![
            field(":method", "GET"),
            field(":path", "/search"),
            field("x-request-id", "one"),
        ],
        vec![
            field(":method", "GET"),
            field(":path", "/search"),
            field("x-request-id", "two"),
        ],
        vec![field("x-request-id", "two"), field("x-request-id", "one")],
    ];

    for fields in &blocks {
        let block = encoder.encode(fields);
        let decoded = decoder.decode(&block).unwrap();
        assert_eq!(&decoded, fields);
        assert!(tables_match(encoder.table(), decoder.table()));
    }
}

#[test]
fn repeated_field_compresses_to_one_byte() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    let fields = vec![field("x-session", "deadbeef")];

    let first = encoder.encode(&fields);
    assert!(first.len() > 1);
    decoder.decode(&first).unwrap();

    // Second occurrence is a full dynamic-table match at index 62
    let second = encoder.encode(&fields);
    assert_eq!(&second[..], &[0xBE]);
    assert_eq!(decoder.decode(&second).unwrap(), fields);
}

#[test]
fn cookie_headers_bypass_the_table() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    let block = encoder.encode(&[
        field("cookie", "sid=alpha"),
        field("Set-Cookie", "sid=alpha; HttpOnly"),
    ]);
    let decoded = decoder.decode(&block).unwrap();

    // The name is recovered through the static table, so mixed-case
    // producers come back canonicalized; the value is untouched.
    assert_eq!(&decoded[0].name[..], b"cookie");
    assert_eq!(&decoded[0].value[..], b"sid=alpha");
    assert_eq!(&decoded[1].name[..], b"set-cookie");
    assert_eq!(&decoded[1].value[..], b"sid=alpha; HttpOnly");

    assert!(encoder.table().is_empty());
    assert!(decoder.table().is_empty());

    // Repeating a cookie still does not index it
    let block = encoder.encode(&[field("cookie", "sid=alpha")]);
    decoder.decode(&block).unwrap();
    assert!(encoder.table().is_empty());
    assert!(decoder.table().is_empty());
}

#[test]
fn resize_flows_through_to_the_decoder() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    // Warm both tables
    let warm = vec![field("x-a", "1"), field("x-b", "2")];
    decoder.decode(&encoder.encode(&warm)).unwrap();
    assert_eq!(decoder.table().len(), 2);

    // Shrink to fit a single entry: x-b is 3 + 1 + 32 = 36 octets
    encoder.resize(40);
    let block = encoder.encode(&[field(":method", "GET")]);
    decoder.decode(&block).unwrap();

    assert_eq!(decoder.table().capacity(), 40);
    assert_eq!(decoder.table().len(), 1);
    assert_eq!(&decoder.table().get(0).unwrap().name[..], b"x-b");
    assert!(tables_match(encoder.table(), decoder.table()));

    // Shrink to zero and grow back; both updates surface in one block
    encoder.resize(0);
    encoder.resize(4096);
    let block = encoder.encode(&[field("x-c", "3")]);
    let decoded = decoder.decode(&block).unwrap();

    assert_eq!(decoded, vec![field("x-c", "3")]);
    assert_eq!(decoder.table().capacity(), 4096);
    assert_eq!(decoder.table().len(), 1);
    assert!(tables_match(encoder.table(), decoder.table()));
}

#[test]
fn zero_capacity_codec_still_round_trips() {
    let mut encoder = Encoder::new(0);
    let mut decoder = Decoder::new(0);

    let fields = vec![field(":method", "GET"), field("x-custom", "value")];

    for _ in 0..2 {
        let block = encoder.encode(&fields);
        assert_eq!(decoder.decode(&block).unwrap(), fields);
        assert!(encoder.table().is_empty());
        assert!(decoder.table().is_empty());
    }
}

#[test]
fn oversize_entry_empties_both_tables() {
    let mut encoder = Encoder::new(64);
    let mut decoder = Decoder::new(64);

    decoder.decode(&encoder.encode(&[field("x-a", "1")])).unwrap();
    assert_eq!(decoder.table().len(), 1);

    let big = "v".repeat(100);
    let fields = vec![HeaderField::new("x-big", big.into_bytes())];
    let block = encoder.encode(&fields);
    assert_eq!(decoder.decode(&block).unwrap(), fields);

    assert!(encoder.table().is_empty());
    assert!(decoder.table().is_empty());
}

#[test]
fn binary_values_round_trip() {
    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new(4096);

    let value: Vec<u8> = (0u8..=255).collect();
    let fields = vec![HeaderField::new("x-binary", value)];

    let block = encoder.encode(&fields);
    assert_eq!(decoder.decode(&block).unwrap(), fields);
}

#[test]
fn decoder_rejects_garbage_after_valid_fields() {
    let mut decoder = Decoder::new(4096);

    // A valid indexed field, then a truncated literal
    let result = decoder.decode(&[0x82, 0x40, 0x0a]);
    assert_eq!(result, Err(HpackError::UnexpectedEof));
}

#[test]
fn decoder_rejects_reference_to_evicted_entry() {
    let mut decoder = Decoder::new(4096);

    // Insert one entry, shrink the table away in a later block, then
    // reference index 62 again
    decoder
        .decode(&[0x40, 0x03, b'x', b'-', b'a', 0x01, b'1'])
        .unwrap();
    decoder.decode(&[0x20]).unwrap();
    assert_eq!(decoder.decode(&[0xBE]), Err(HpackError::InvalidIndex(62)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn header_field() -> impl Strategy<Value = HeaderField> {
        let name = proptest::collection::vec(any::<u8>(), 1..16);
        let value = proptest::collection::vec(any::<u8>(), 0..32);
        (name, value).prop_map(|(n, v)| HeaderField::new(n, v))
    }

    proptest! {
        #[test]
        fn blocks_round_trip_and_tables_stay_synchronized(
            blocks in proptest::collection::vec(
                proptest::collection::vec(header_field(), 0..8),
                1..4,
            )
        ) {
            let mut encoder = Encoder::new(4096);
            let mut decoder = Decoder::new(4096);

            for fields in &blocks {
                let block = encoder.encode(fields);
                let decoded = decoder.decode(&block).unwrap();
                prop_assert_eq!(&decoded, fields);
                prop_assert!(tables_match(encoder.table(), decoder.table()));
            }
        }

        #[test]
        fn table_size_never_exceeds_capacity(
            fields in proptest::collection::vec(header_field(), 0..16),
            capacity in 0usize..256,
        ) {
            let mut encoder = Encoder::new(capacity);
            encoder.encode(&fields);
            prop_assert!(encoder.table().size() <= encoder.table().capacity());
        }
    }
}
