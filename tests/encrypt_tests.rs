//! tests/encrypt_tests.rs
//! High-level encrypt/decrypt behaviour through the string entry points

mod common;

use common::{TEST_CIPHERTEXT, TEST_MESSAGE, TEST_MESSAGES, TEST_PASSWORD};
use hexseal::{decrypt_message, encrypt_message, HexsealError};

#[test]
fn reference_scenario() {
    let hex = encrypt_message(TEST_PASSWORD, TEST_MESSAGE);
    assert_eq!(hex, TEST_CIPHERTEXT);
    assert_eq!(hex, encrypt_message(TEST_PASSWORD, TEST_MESSAGE));

    assert_eq!(decrypt_message(TEST_PASSWORD, &hex).unwrap(), TEST_MESSAGE);
    assert_eq!(
        decrypt_message("wrong", &hex),
        Err(HexsealError::Authentication)
    );

    let truncated = &hex[..hex.len() - 1];
    assert!(matches!(
        decrypt_message(TEST_PASSWORD, truncated),
        Err(HexsealError::Format(_))
    ));
}

#[test]
fn roundtrip_various_messages_and_passwords() {
    let passwords = ["", "123", "correct horse battery staple", "パスワード123!@#"];

    for password in passwords {
        for &message in TEST_MESSAGES {
            let hex = encrypt_message(password, message);
            let decrypted = decrypt_message(password, &hex)
                .unwrap_or_else(|e| panic!("roundtrip failed for {password:?}/{message:?}: {e}"));
            assert_eq!(decrypted, message);
        }
    }
}

#[test]
fn output_is_lowercase_hex_of_expected_length() {
    for &message in TEST_MESSAGES {
        let hex = encrypt_message(TEST_PASSWORD, message);
        assert_eq!(hex.len(), 2 * (message.len() + 16), "length for {message:?}");
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn encryption_is_deterministic() {
    let large = "A".repeat(100_000);
    assert_eq!(
        encrypt_message("determinism", &large),
        encrypt_message("determinism", &large)
    );
}

#[test]
fn empty_message_roundtrips() {
    let hex = encrypt_message(TEST_PASSWORD, "");
    assert_eq!(hex.len(), 32, "tag only");
    assert_eq!(decrypt_message(TEST_PASSWORD, &hex).unwrap(), "");
}

#[test]
fn different_passwords_give_different_ciphertexts() {
    assert_ne!(
        encrypt_message("password-one", TEST_MESSAGE),
        encrypt_message("password-two", TEST_MESSAGE)
    );
}

#[test]
fn wrong_password_is_rejected() {
    let pairs = [("123", "124"), ("", " "), ("Password", "password"), ("a", "")];

    for (right, wrong) in pairs {
        for &message in TEST_MESSAGES {
            let hex = encrypt_message(right, message);
            assert_eq!(
                decrypt_message(wrong, &hex),
                Err(HexsealError::Authentication),
                "{wrong:?} accepted for {right:?}/{message:?}"
            );
        }
    }
}

#[test]
fn every_single_bit_flip_is_detected() {
    let hex = encrypt_message(TEST_PASSWORD, TEST_MESSAGE);
    let sealed = hex::decode(&hex).unwrap();

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 1 << bit;
            assert_eq!(
                decrypt_message(TEST_PASSWORD, &hex::encode(&tampered)),
                Err(HexsealError::Authentication),
                "flip of byte {byte} bit {bit} went undetected"
            );
        }
    }
}

#[test]
fn truncated_and_extended_ciphertexts_are_rejected() {
    let hex = encrypt_message(TEST_PASSWORD, TEST_MESSAGE);

    // Drop whole bytes from the end (tag) and from the front (ciphertext)
    for cut in [2, 4, 32] {
        assert_eq!(
            decrypt_message(TEST_PASSWORD, &hex[..hex.len() - cut]),
            Err(HexsealError::Authentication)
        );
        assert_eq!(
            decrypt_message(TEST_PASSWORD, &hex[cut..]),
            Err(HexsealError::Authentication)
        );
    }

    let extended = format!("{hex}00");
    assert_eq!(
        decrypt_message(TEST_PASSWORD, &extended),
        Err(HexsealError::Authentication)
    );
}

#[test]
fn empty_ciphertext_is_an_authentication_failure() {
    assert_eq!(
        decrypt_message(TEST_PASSWORD, ""),
        Err(HexsealError::Authentication)
    );
    assert_eq!(
        decrypt_message(TEST_PASSWORD, "0x"),
        Err(HexsealError::Authentication)
    );
}

#[test]
fn decrypt_accepts_uppercase_and_prefix() {
    let upper = TEST_CIPHERTEXT.to_uppercase();
    assert_eq!(decrypt_message(TEST_PASSWORD, &upper).unwrap(), TEST_MESSAGE);

    let prefixed = format!("0x{TEST_CIPHERTEXT}");
    assert_eq!(
        decrypt_message(TEST_PASSWORD, &prefixed).unwrap(),
        TEST_MESSAGE
    );
}

#[test]
fn malformed_hex_is_a_format_error() {
    let cases = [
        "abc",                      // odd length
        "zz",                       // non-hex
        "4efe ecb2",                // whitespace
        "0X4efeecb2",               // only lowercase 0x is a prefix
        "4efeecb2dd77a81d79de42g0", // one bad digit late in the string
    ];

    for input in cases {
        let err = decrypt_message(TEST_PASSWORD, input).unwrap_err();
        assert!(
            matches!(err, HexsealError::Format(_)),
            "{input:?} gave {err:?}"
        );
        assert!(err.is_recoverable());
    }
}

#[test]
fn authentication_failures_are_not_recoverable() {
    let err = decrypt_message("wrong", TEST_CIPHERTEXT).unwrap_err();
    assert!(!err.is_recoverable());
}
