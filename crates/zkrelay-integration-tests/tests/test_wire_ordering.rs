//! # Wire Ordering Property
//!
//! Public signal order is significant to the attestation network. The trip
//! from raw bundle through the encoder to the wire form and back through
//! JSON must preserve the signal sequence exactly — `["1","2"]` must never
//! come back as `["2","1"]`.

use proptest::prelude::*;

use zkrelay_core::{encode, RawProofBundle, WireProofBundle};

proptest! {
    #[test]
    fn signal_order_survives_encode_and_wire_round_trip(
        signals in proptest::collection::vec("[0-9]{1,30}", 1..8)
    ) {
        let raw = RawProofBundle {
            vkey: "0xAB".to_string(),
            proof: "0xCD".to_string(),
            pubsignal: signals.clone(),
        };
        let bundle = encode(&raw).unwrap();

        let wire = WireProofBundle::from(&bundle);
        prop_assert_eq!(&wire.public_signals, &signals);

        let json = serde_json::to_string(&wire).unwrap();
        let back: WireProofBundle = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back.public_signals, &signals);
    }
}

#[test]
fn two_element_order_is_literal() {
    let bundle = encode(&RawProofBundle {
        vkey: "0xAB".to_string(),
        proof: "0xCD".to_string(),
        pubsignal: vec!["1".to_string(), "2".to_string()],
    })
    .unwrap();
    let wire = WireProofBundle::from(&bundle);
    assert_eq!(wire.public_signals, vec!["1", "2"]);
    assert_ne!(wire.public_signals, vec!["2", "1"]);
}
