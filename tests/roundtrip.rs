use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use textbook_rsa::rsa::{
    decode, derive_key, derive_key_from, derive_private_exponent, encode, mod_inverse, mod_pow,
    random_public_exponent, BlockSequence, RsaBigInt,
};
use textbook_rsa::RsaError;

fn big(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

#[test]
fn textbook_example_end_to_end() {
    let params = derive_key("61", "53").unwrap();
    assert_eq!(params.n, big(3233));
    assert_eq!(params.phi, big(3120));

    let d = derive_private_exponent("17", &params.phi).unwrap();
    assert_eq!(d, big(2753));

    let c = mod_pow(&big(65), &big(17), &params.n);
    assert_eq!(mod_pow(&c, &d, &params.n), big(65));
}

#[test]
fn text_roundtrip_with_small_primes() {
    let params = derive_key("61", "53").unwrap();
    let e = big(17);
    let d = derive_private_exponent("17", &params.phi).unwrap();

    let text = "The quick brown fox; Швидка руда лисиця.";
    let blocks = encode(text, &e, &params.n).unwrap();
    assert_eq!(blocks.len(), text.chars().count());
    assert_eq!(decode(&blocks.to_string(), &d, &params.n).unwrap(), text);
}

#[test]
fn text_roundtrip_covers_full_unicode_range() {
    // n > 0x10FFFF so every scalar value fits in one block
    let params = derive_key("1000003", "1000033").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let e = random_public_exponent(&params.phi, &mut rng).unwrap();
    let d = mod_inverse(&e, &params.phi).unwrap();

    let text: String = (0..200)
        .filter_map(|_| char::from_u32(rng.gen_range(0..=0x10FFFFu32)))
        .chain("😀𝄞 mixed".chars())
        .collect();

    let blocks = encode(&text, &e, &params.n).unwrap();
    assert_eq!(blocks.len(), text.chars().count());
    assert_eq!(decode(&blocks.to_string(), &d, &params.n).unwrap(), text);
}

#[test]
fn random_keys_roundtrip() {
    let mut rng = StdRng::seed_from_u64(2024);
    let primes = [1009u64, 1013, 1019, 1021, 1031, 1033, 1039, 1049];
    for _ in 0..20 {
        let p = big(primes[rng.gen_range(0..primes.len())]);
        let q = big(primes[rng.gen_range(0..primes.len())]);
        if p == q {
            continue;
        }
        let params = derive_key_from(&p, &q).unwrap();
        let e = random_public_exponent(&params.phi, &mut rng).unwrap();
        let d = mod_inverse(&e, &params.phi).unwrap();
        assert_eq!((&e * &d) % &params.phi, big(1));

        let text = "Round trip ✓";
        let blocks = encode(text, &e, &params.n).unwrap();
        assert_eq!(decode(&blocks.to_string(), &d, &params.n).unwrap(), text);
    }
}

#[test]
fn overflow_aborts_without_output() {
    let params = derive_key("11", "13").unwrap();
    // n = 143: 'a' = 97 fits, '~' = 126 fits, 'Ж' = 1046 does not
    let result = encode("a~Жa", &big(7), &params.n);
    assert_eq!(
        result,
        Err(RsaError::BlockOverflow {
            code: 0x416,
            n: big(143)
        })
    );
}

#[test]
fn empty_inputs_are_rejected() {
    let params = derive_key("61", "53").unwrap();
    assert_eq!(encode("", &big(17), &params.n), Err(RsaError::EmptyInput));
    assert_eq!(decode("", &big(2753), &params.n), Err(RsaError::EmptyCipher));
    assert_eq!(decode("  ", &big(2753), &params.n), Err(RsaError::EmptyCipher));
}

#[test]
fn stray_separators_are_ignored() {
    let seq = BlockSequence::parse("5, ,7").unwrap();
    assert_eq!(seq.blocks, vec![big(5), big(7)]);

    let params = derive_key("61", "53").unwrap();
    let d = big(2753);
    assert_eq!(
        decode(",2790,,2790,", &d, &params.n).unwrap(),
        decode("2790,2790", &d, &params.n).unwrap()
    );
}

#[test]
fn wrong_private_exponent_is_not_detected_but_may_fail_decoding() {
    // d is not checked against e; a wrong d yields whatever the math gives
    let params = derive_key("61", "53").unwrap();
    let blocks = encode("A", &big(17), &params.n).unwrap();
    let result = decode(&blocks.to_string(), &big(1), &params.n);
    assert_eq!(result.unwrap(), char::from_u32(2790).unwrap().to_string());
}

#[test]
fn factor_validation() {
    assert!(derive_key("4", "7").is_ok());
    assert!(matches!(derive_key("1", "7"), Err(RsaError::InvalidFactor { .. })));
    assert!(matches!(derive_key("7", "1"), Err(RsaError::InvalidFactor { .. })));
    assert!(matches!(derive_key("7", "seven"), Err(RsaError::Parse { .. })));
}
