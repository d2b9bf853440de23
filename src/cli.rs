//! Command line validation and dispatch.
//!
//! Every check happens here, before any cipher runs; the ciphers themselves
//! assume well formed keys.

use derive_more::Display;
use std::{ffi::OsStr, io};
use tracing::debug;

use crate::args::{Args, Operation, UnknownOperation};
use crate::cipher::{absmod, CaesarCipher, CharRange, Cipher, VigenereCipher};
use crate::config::Config;

/// Rejections of command line input. Each one ends the invocation with exit code 1.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum CliError {
    #[display(fmt = "Must provide key")]
    EmptyKey,
    #[display(fmt = "Must provide message")]
    EmptyMessage,
    #[display(
        fmt = "Error: Message length exceeds maximum allowed size of {} characters",
        max
    )]
    MessageTooLong { max: usize },
    #[display(fmt = "Key characters must be in the range '{}'->'{}'", low, high)]
    InvalidVigenereKey { low: char, high: char },
    #[display(fmt = "Please enter a valid integer key")]
    InvalidCaesarKey,
    #[display(fmt = "Invalid operation: {}", _0)]
    InvalidOperation(String),
}

impl std::error::Error for CliError {}

impl CliError {
    /// Whether the usage message should follow the diagnostic
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            CliError::EmptyKey | CliError::EmptyMessage | CliError::InvalidOperation(_)
        )
    }
}

/// Two line usage message, invocation syntax first.
pub fn usage(program: &str) -> String {
    let operations = Operation::ALL.map(|op| op.to_string()).join(", ");
    format!("Usage: {program} <operation> <key> <message>\nPermitted operations: {operations}")
}

/// Parses a caesar key and reduces it into `[0, range size)`.
/// Accepts an optional sign and decimal digits fitting an `i32`, nothing else.
pub fn parse_caesar_key(range: CharRange, text: &OsStr) -> Result<i64, CliError> {
    let text = text.to_str().ok_or(CliError::InvalidCaesarKey)?;
    let key: i32 = text.parse().map_err(|err| {
        debug!(key = text, %err, "rejected caesar key");
        CliError::InvalidCaesarKey
    })?;
    Ok(absmod(i64::from(key), range.size() as i64))
}

pub fn vigenere_cipher(range: CharRange, key: &OsStr) -> Result<VigenereCipher, CliError> {
    VigenereCipher::new(range, key.as_encoded_bytes()).map_err(|err| {
        debug!(key = %key.to_string_lossy(), %err, "rejected vigenere key");
        CliError::InvalidVigenereKey {
            low: char::from(range.low()),
            high: char::from(range.high()),
        }
    })
}

/// Writes the cipher output followed by a newline.
/// Bytes go out as given, whether or not they form valid UTF-8.
pub fn write_output(out: &mut impl io::Write, output: &[u8]) -> io::Result<()> {
    out.write_all(output)?;
    writeln!(out)?;
    out.flush()
}

/// Validates `args` against `config` and runs the requested operation.
pub fn run(args: &Args, config: &Config) -> Result<Vec<u8>, CliError> {
    if args.key.is_empty() {
        return Err(CliError::EmptyKey);
    }
    if args.message.is_empty() {
        return Err(CliError::EmptyMessage);
    }
    let message = args.message.as_encoded_bytes();
    if message.len() > config.max_message_len {
        return Err(CliError::MessageTooLong {
            max: config.max_message_len,
        });
    }
    let operation: Operation = args
        .operation
        .to_str()
        .ok_or_else(|| CliError::InvalidOperation(args.operation.to_string_lossy().into_owned()))?
        .parse()
        .map_err(|UnknownOperation(op)| CliError::InvalidOperation(op))?;

    let cipher: Box<dyn Cipher> = match operation {
        Operation::VigenereEncrypt | Operation::VigenereDecrypt => {
            Box::new(vigenere_cipher(config.range, &args.key)?)
        }
        Operation::CaesarEncrypt | Operation::CaesarDecrypt => {
            let key = parse_caesar_key(config.range, &args.key)?;
            debug!(shift = key, "wrapped caesar key");
            Box::new(CaesarCipher::new(config.range, key))
        }
    };
    debug!(%operation, len = message.len(), "running cipher");

    Ok(if operation.is_encrypt() {
        cipher.encrypt(message)
    } else {
        cipher.decrypt(message)
    })
}
