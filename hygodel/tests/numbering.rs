use std::sync::Arc;

use hygodel::prelude::*;
use num_bigint::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const BOOK_FORMULA: &str = "(∃x)(x=sy)";
const BOOK_NUMBER: &str = "172225505803959398742621651659678877886965404082311908389214945877004912002249920215937500000000";

/// Every literal character of the vocabulary, variables without ticks.
const ALPHABET: [char; 21] = [
    '~', '∨', '⊃', '∃', '=', '0', 's', '(', ')', ',', '+', '×', 'x', 'y', 'z', 'p', 'q', 'r', 'P',
    'Q', 'R',
];

fn random_formula(rng: &mut impl Rng, len: usize) -> String {
    let mut text = String::new();
    for _ in 0..len {
        let c = ALPHABET[rng.random_range(0..ALPHABET.len())];
        text.push(c);
        if c.is_alphabetic() && c != 's' {
            for _ in 0..rng.random_range(0..=1) {
                text.push('`');
            }
        }
    }
    text
}

#[test]
fn book_example_encodes_to_known_number() {
    let numbering = GodelNumbering::new();
    let number = numbering.encode(BOOK_FORMULA).unwrap();
    assert_eq!(number.to_string(), BOOK_NUMBER);
}

#[test]
fn book_example_decodes_back() {
    let numbering = GodelNumbering::new();
    assert_eq!(numbering.decode_str(BOOK_NUMBER).unwrap(), BOOK_FORMULA);

    let as_int: BigInt = BOOK_NUMBER.parse().unwrap();
    assert_eq!(numbering.decode(&as_int).unwrap(), BOOK_FORMULA);
}

#[test]
fn empty_formula_is_one() {
    let numbering = GodelNumbering::new();
    assert_eq!(numbering.encode("").unwrap(), GodelNumber::one());
    assert_eq!(numbering.decode(&BigInt::from(1)).unwrap(), "");
}

#[test]
fn small_known_values() {
    let numbering = GodelNumbering::new();
    assert_eq!(numbering.encode("0=0").unwrap().to_string(), "243000000");
    assert_eq!(
        numbering.encode("x`=y`").unwrap().to_string(),
        "379687500000000000000000000000"
    );
    assert_eq!(numbering.decode(&BigInt::from(8192)).unwrap(), "x");
    assert_eq!(
        numbering
            .decode(&(BigInt::from(8192) * BigInt::from(3).pow(13)))
            .unwrap(),
        "xx"
    );
}

#[test]
fn round_trip_on_every_kind_of_symbol() {
    let numbering = GodelNumbering::new();
    for text in [
        "0",
        "~(0=s0)",
        "(∃x)(x=sy)",
        "p∨~p",
        "(p⊃q)⊃(~q⊃~p)",
        "P(x)⊃Q(x,y)",
        "x`+y``×z```=0",
        "r```∨R``",
        ")(∃",
    ] {
        let number = numbering.encode(text).unwrap();
        assert_eq!(numbering.decode_str(&number.to_string()).unwrap(), text);
    }
}

#[test]
fn round_trip_on_random_formulas() {
    let numbering = GodelNumbering::new();
    let mut rng = ChaCha20Rng::seed_from_u64(0x60de1);

    for _ in 0..100 {
        let len = rng.random_range(0..9);
        let text = random_formula(&mut rng, len);
        let number = numbering.encode(&text).unwrap();
        let decoded = numbering.decoder().decode(&number).unwrap();
        assert_eq!(decoded.to_string(), text);
    }
}

#[test]
fn distinct_formulas_get_distinct_numbers() {
    let numbering = GodelNumbering::new();
    let texts = [
        "", "0", "00", "000", "x", "y", "xy", "yx", "x`", "p", "P", "s0", "0s", "(x)", "x=y",
        "y=x", "~p", "p~",
    ];

    let mut seen = std::collections::BTreeMap::new();
    for text in texts {
        let number = numbering.encode(text).unwrap();
        if let Some(previous) = seen.insert(number.clone(), text) {
            panic!("`{previous}` and `{text}` both encode to {number}");
        }
    }
}

#[test]
fn gaps_in_the_prime_sequence_are_rejected() {
    let numbering = GodelNumbering::new();

    // 2^1 * 5^1 skips 3
    let err = numbering.decode(&BigInt::from(10)).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedGodelNumber(Malformation::PrimeGap {
            index: 2,
            expected: 3
        })
    );

    // prime factor far beyond the sequence
    let err = numbering.decode(&BigInt::from(64 * 1_000_003u64)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGodelNumber(Malformation::PrimeGap { index: 2, expected: 3 })
    ));

    // missing 2 altogether
    let err = numbering.decode(&BigInt::from(3)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGodelNumber(Malformation::PrimeGap { index: 1, expected: 2 })
    ));
}

#[test]
fn gaps_are_found_without_factoring_past_them() {
    let primes = Arc::new(PrimeSequence::new());
    let numbering = GodelNumbering::with_primes(Arc::clone(&primes));

    // 2 * (2^61 - 1): trial division up to the large factor would take ages
    let number = BigInt::from(2) * BigInt::from((1u64 << 61) - 1);
    let err = numbering.decode(&number).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedGodelNumber(Malformation::PrimeGap {
            index: 2,
            expected: 3
        })
    );
    assert!(primes.len() < 10, "cache grew to {} primes", primes.len());
}

#[test]
fn exponents_that_are_not_codes_are_rejected() {
    let numbering = GodelNumbering::new();

    // 2^6 * 3^25, 25 = 5^2 is not a symbol code
    let number = BigInt::from(64) * BigInt::from(3).pow(25);
    let err = numbering.decode(&number).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedGodelNumber(Malformation::InvalidExponent { index: 2, code: 25 })
    );
}

#[test]
fn non_positive_inputs_are_rejected() {
    let numbering = GodelNumbering::new();

    for value in [0, -5, -1] {
        let err = numbering.decode(&BigInt::from(value)).unwrap_err();
        assert!(err.is_invalid_godel_number(), "decode({value}) gave {err}");
    }

    for text in ["0", "-5", "1.5", "", "ten", " 12"] {
        let err = numbering.decode_str(text).unwrap_err();
        assert!(err.is_invalid_godel_number(), "decode_str({text:?}) gave {err}");
    }
}

#[test]
fn only_the_canonical_decimal_form_is_accepted() {
    let numbering = GodelNumbering::new();
    assert_eq!(numbering.decode_str("243000000").unwrap(), "0=0");

    for text in ["243_000_000", "+243000000", "000243000000", "0243000000", "243000000\n"] {
        let err = numbering.decode_str(text).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGodelNumber {
                value: text.to_string()
            }
        );
    }
}

#[test]
fn unknown_characters_are_rejected() {
    let numbering = GodelNumbering::new();
    for text in ["a", "x=a", "0 = 0", "∀x", "x≠y"] {
        let err = numbering.encode(text).unwrap_err();
        assert!(err.is_unknown_symbol(), "encode({text:?}) gave {err}");
    }
}

#[test]
fn longer_formulas_have_more_digits() {
    let numbering = GodelNumbering::new();
    let text: Vec<char> = "(∃x)(x=sy)⊃~(p∨q)".chars().collect();

    let mut previous = 0;
    for end in 1..=text.len() {
        let prefix: String = text[..end].iter().collect();
        let digits = numbering.encode(&prefix).unwrap().digits();
        assert!(
            digits > previous,
            "`{prefix}` has {digits} digits, not more than {previous}"
        );
        previous = digits;
    }
}

#[test]
fn typed_formulas_encode_like_their_text() {
    let numbering = GodelNumbering::new();
    let mut formula = Formula::new();
    formula.push(ConstantSign::Zero);
    formula.push(ConstantSign::Equals);
    formula.push(Variable::numerical(0));

    let typed = numbering.encoder().encode(&formula).unwrap();
    assert_eq!(typed, numbering.encode("0=x").unwrap());
    assert_eq!(numbering.decoder().decode(&typed).unwrap(), formula);
}

#[test]
fn workers_share_one_prime_cache() {
    let primes = Arc::new(PrimeSequence::new());
    let numbering = GodelNumbering::with_primes(Arc::clone(&primes));
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let texts: Vec<String> = (0..64)
        .map(|_| {
            let len = rng.random_range(1..10);
            random_formula(&mut rng, len)
        })
        .collect();

    let numbers: Vec<GodelNumber> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .chunks(8)
            .map(|chunk| {
                let numbering = numbering.clone();
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|text| numbering.encode(text).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    let single = GodelNumbering::new();
    for (text, number) in texts.iter().zip(&numbers) {
        assert_eq!(number, &single.encode(text).unwrap());
        assert_eq!(&numbering.decoder().decode(number).unwrap().to_string(), text);
    }
    assert!(primes.len() >= 9);
}
