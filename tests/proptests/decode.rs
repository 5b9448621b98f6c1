//! Property tests for share value decoding

use num_bigint::BigInt;
use quickcheck_macros::quickcheck;
use shamvote::Radix;
use shamvote::codec::{decode_value, encode_value};

fn radix_from(seed: u8) -> Radix {
    Radix::new(u32::from(seed) % 35 + 2).unwrap()
}

/// Decoding agrees with num-bigint's own radix formatting
#[quickcheck]
fn prop_decode_matches_to_str_radix(value: u64, high: u64, seed: u8) -> bool {
    let radix = radix_from(seed);
    let value: BigInt = (BigInt::from(high) << 64) + value;
    let digits = value.to_str_radix(*radix);

    decode_value(radix, &digits).unwrap() == value
}

/// Letter digits are case-insensitive
#[quickcheck]
fn prop_decode_ignores_case(value: u64, seed: u8) -> bool {
    let radix = radix_from(seed);
    let value = BigInt::from(value);
    let digits = encode_value(radix, &value);

    decode_value(radix, &digits.to_uppercase()).unwrap() == value
}

/// Leading zeros never change the value
#[quickcheck]
fn prop_leading_zeros(value: u32, zeros: u8, seed: u8) -> bool {
    let radix = radix_from(seed);
    let value = BigInt::from(value);
    let digits = format!(
        "{}{}",
        "0".repeat(usize::from(zeros % 16)),
        encode_value(radix, &value)
    );

    decode_value(radix, &digits).unwrap() == value
}

/// Any digit at or above the base is rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(seed: u8) -> bool {
    let radix = radix_from(seed % 34);
    let digit = char::from_digit(*radix, 36).unwrap();

    decode_value(radix, &format!("1{digit}")).is_err()
}
