use std::io::Cursor;

use numprompt::utils::{
    NumberKind, ReadError, ReadOptions, Terminal, diagnostic_message, is_valid_number,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

fn terminal(lines: &[&str]) -> TestTerminal {
    Terminal::new(Cursor::new(lines.concat().into_bytes()), Vec::new())
}

fn diagnostics(t: TestTerminal) -> String {
    String::from_utf8(t.into_parts().1).unwrap()
}

fn random_digits(rng: &mut SmallRng) -> String {
    let len = rng.random_range(1..=64);
    (0..len)
        .map(|_| char::from(rng.random_range(b'0'..=b'9')))
        .collect()
}

#[test]
fn digit_strings_are_always_valid() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let digits = random_digits(&mut rng);
        assert!(is_valid_number(&digits, false, false), "{digits}");
        assert!(is_valid_number(&format!("{digits}\n"), false, false), "{digits}");
    }
}

#[test]
fn one_foreign_character_invalidates_the_line() {
    let mut rng = SmallRng::seed_from_u64(42);
    let foreign = ['a', 'Z', ' ', '+', ',', '_', 'e', '/', '\t', '#'];

    for _ in 0..500 {
        let mut line = random_digits(&mut rng);
        let at = rng.random_range(0..=line.len());
        let c = foreign[rng.random_range(0..foreign.len())];
        line.insert(at, c);

        for (neg, float) in [(false, false), (true, false), (false, true), (true, true)] {
            assert!(!is_valid_number(&line, neg, float), "{line:?}");
        }
    }
}

#[test]
fn sign_and_point_only_pass_when_allowed() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let digits = random_digits(&mut rng);
        let negative = format!("-{digits}");
        let with_point = format!("{digits}.{digits}");

        assert!(!is_valid_number(&negative, false, false));
        assert!(is_valid_number(&negative, true, false));
        assert!(!is_valid_number(&with_point, true, false));
        assert!(is_valid_number(&with_point, false, true));
    }
}

#[test]
fn rejected_twice_then_accepted() {
    let mut t = terminal(&["abc\n", "-7\n", "7\n"]);
    let mut out = 0;

    t.read_int(&mut out, ReadOptions::new().with_highlight(false))
        .unwrap();

    assert_eq!(out, 7);
    let expected = format!(
        "\n{msg}\n\n{msg}\n",
        msg = diagnostic_message(NumberKind::Integer, false)
    );
    assert_eq!(diagnostics(t), expected);
}

#[test]
fn unchecked_garbage_is_zero() {
    let mut t = terminal(&["xyz\n"]);
    let mut out = -3;

    t.read_int(&mut out, ReadOptions::unchecked()).unwrap();

    assert_eq!(out, 0);
    assert!(diagnostics(t).is_empty());
}

#[test]
fn closed_stream_fails_without_touching_output() {
    let mut t = terminal(&[]);
    let mut out = 17;

    let err = t.read_int(&mut out, ReadOptions::new()).unwrap_err();

    assert!(matches!(err, ReadError::StreamClosed { .. }));
    assert_eq!(out, 17);
}

#[test]
fn multiple_points_are_accepted_and_converted_by_prefix() {
    let mut t = terminal(&["1.2.3\n"]);
    let mut out = 0.0_f32;

    t.read_float(&mut out, ReadOptions::new().with_highlight(false))
        .unwrap();

    assert_eq!(out, 1.2);
    assert!(diagnostics(t).is_empty());
}

#[test]
fn lone_decimal_point_passes_validation_and_reads_as_zero() {
    let mut t = terminal(&[".\n"]);
    let mut out = 9.0_f32;

    t.read_float(&mut out, ReadOptions::new()).unwrap();

    assert_eq!(out, 0.0);
}

#[test]
fn retry_cap_stops_endless_bad_input() {
    let bad = vec!["nope\n"; 50];
    let mut t = terminal(&bad);
    let mut out = 0.0_f32;

    let err = t
        .read_float(&mut out, ReadOptions::new().with_max_retries(5))
        .unwrap_err();

    assert!(matches!(err, ReadError::RetriesExhausted { attempts: 5 }));
    assert_eq!(err.to_string(), "gave up after 5 invalid lines");
}

#[test]
fn big_integer_saturates_after_validation() {
    let mut t = terminal(&["99999999999\n"]);
    let mut out = 0;

    t.read_int(&mut out, ReadOptions::new()).unwrap();

    assert_eq!(out, i32::MAX);
}
