//! Embedded seed corpus
//!
//! Hangul words compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/seed_words.rs"));
