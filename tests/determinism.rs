use enc_context::codec::sorted_pairs;
use enc_context::{ContextString, EncryptionContext};

fn fixture_pairs() -> Vec<(String, String)> {
    vec![
        ("department".to_string(), "finance".to_string()),
        ("aws-crypto-public-key".to_string(), "AmZvbyBiYXIK".to_string()),
        ("Region".to_string(), "us-west-2".to_string()),
        ("a".to_string(), "".to_string()),
        ("ab".to_string(), "x".to_string()),
        ("\u{00e9}t\u{00e9}".to_string(), "summer".to_string()),
        ("".to_string(), "empty key".to_string()),
    ]
}

fn build(pairs: &[(String, String)]) -> EncryptionContext {
    let mut ctx = EncryptionContext::new();
    for (k, v) in pairs {
        assert!(ctx.insert(k.as_str(), v.as_str()));
    }
    ctx
}

#[test]
fn determinism_insertion_order_does_not_matter() {
    let forward = fixture_pairs();
    let mut reversed = fixture_pairs();
    reversed.reverse();
    let mut rotated = fixture_pairs();
    rotated.rotate_left(3);

    let a = build(&forward).to_bytes().unwrap();
    let b = build(&reversed).to_bytes().unwrap();
    let c = build(&rotated).to_bytes().unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn determinism_independent_of_table_capacity() {
    let pairs = fixture_pairs();
    let small = build(&pairs);

    let mut large = EncryptionContext::with_capacity(4096);
    for (k, v) in pairs.iter().rev() {
        large.insert(k.as_str(), v.as_str());
    }

    assert_eq!(small.to_bytes().unwrap(), large.to_bytes().unwrap());
    assert_eq!(small.digest().unwrap(), large.digest().unwrap());
}

#[test]
fn determinism_encoded_keys_are_sorted() {
    let encoded = build(&fixture_pairs()).to_bytes().unwrap();

    // Walk the encoding and collect keys in wire order.
    let count = u16::from_be_bytes([encoded[0], encoded[1]]) as usize;
    let mut pos = 2;
    let mut keys: Vec<&[u8]> = Vec::new();
    for _ in 0..count {
        let key_len = u16::from_be_bytes([encoded[pos], encoded[pos + 1]]) as usize;
        pos += 2;
        keys.push(&encoded[pos..pos + key_len]);
        pos += key_len;
        let value_len = u16::from_be_bytes([encoded[pos], encoded[pos + 1]]) as usize;
        pos += 2 + value_len;
    }

    assert_eq!(pos, encoded.len());
    assert_eq!(keys.len(), fixture_pairs().len());
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys must be strictly ascending");
}

#[test]
fn determinism_sorted_pairs_match_wire_order() {
    let ctx = build(&fixture_pairs());

    let pairs = sorted_pairs(&ctx).unwrap();
    let mut expected: Vec<String> = fixture_pairs().into_iter().map(|(k, _)| k).collect();
    expected.sort();

    let actual: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str().unwrap()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn determinism_round_trip_preserves_contents() {
    let original = build(&fixture_pairs());

    let decoded = EncryptionContext::from_bytes(&original.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.to_bytes().unwrap(), original.to_bytes().unwrap());
}

#[test]
fn determinism_round_trip_binary_contents() {
    let mut original = EncryptionContext::new();
    for i in 0u8..=255 {
        original.insert(vec![i, 0x00, i], vec![0xffu8 - i; usize::from(i)]);
    }

    let decoded = EncryptionContext::from_bytes(&original.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded.len(), 256);
    assert_eq!(decoded, original);
}

#[test]
fn determinism_ownership_does_not_change_bytes() {
    static KEY: &str = "department";

    let mut owned = EncryptionContext::new();
    owned.insert(KEY, "finance");

    let mut borrowed = EncryptionContext::new();
    borrowed.insert(ContextString::from_static_str(KEY), "finance");

    assert_eq!(owned.to_bytes().unwrap(), borrowed.to_bytes().unwrap());
}
