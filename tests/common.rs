//! tests/common.rs
//! Common constants shared across test files

/// Password from the reference scenario
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "123";

/// Message from the reference scenario
#[allow(dead_code)] // Used across multiple test files
pub const TEST_MESSAGE: &str = "hello";

/// `encrypt_message(TEST_PASSWORD, TEST_MESSAGE)`: 5 ciphertext bytes + 16 tag bytes
#[allow(dead_code)] // Used across multiple test files
pub const TEST_CIPHERTEXT: &str = "4efeecb2dd77a81d79de42aa7e1b91bd15f3284a95";

/// SHA-256("123")
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_HEX: &str = "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3";

/// Messages covering empty, ASCII, multi-byte and block-boundary lengths
#[allow(dead_code)] // Used across multiple test files
pub const TEST_MESSAGES: &[&str] = &[
    "",
    "a",
    "hello",
    "exactly sixteen!",
    "seventeen chars!!",
    "héllo wörld 🔐",
    "line one\nline two\ttabbed",
];
