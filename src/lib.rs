//! Caesar and Vigenere ciphers restricted to a contiguous character range.
//!
//! Bytes inside the configured [`cipher::CharRange`] are shifted, everything
//! else is copied through untouched. Neither cipher offers any real secrecy.

pub mod args;
pub mod cipher;
pub mod cli;
pub mod config;
