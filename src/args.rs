use clap::Parser;
use derive_more::Display;
use std::{ffi::OsString, str::FromStr};

/// Caesar and Vigenere ciphers over the letters 'A' to 'Z'
///
/// Arguments are taken verbatim: no flags, no `--` separator. Values are raw
/// OS strings so bytes that are not UTF-8 reach the ciphers untouched.
#[derive(Parser, Debug)]
#[command(
    override_usage = "range-cipher <OPERATION> <KEY> <MESSAGE>",
    disable_help_flag = true
)]
pub struct Args {
    /// One of vigenere-encrypt, vigenere-decrypt, caesar-encrypt, caesar-decrypt
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub operation: OsString,
    /// Letters for vigenere operations, an integer for caesar operations
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub key: OsString,
    /// Text to transform
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub message: OsString,
}

/// Number of arguments after the program name.
pub const ARG_COUNT: usize = 3;

impl Args {
    /// Parses `program` followed by exactly [`ARG_COUNT`] raw arguments.
    ///
    /// Any other count is rejected before clap sees it. The arguments are
    /// placed behind an explicit `--` so clap treats every one of them,
    /// including `--`, `-h` or `--help`, as a positional value.
    pub fn try_from_raw<I>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut raw = raw.into_iter();
        let program = raw.next().unwrap_or_default();
        let values: Vec<OsString> = raw.collect();
        if values.len() != ARG_COUNT {
            return Err(clap::Error::new(clap::error::ErrorKind::WrongNumberOfValues));
        }
        Self::try_parse_from([program, OsString::from("--")].into_iter().chain(values))
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Operation {
    #[display(fmt = "vigenere-encrypt")]
    VigenereEncrypt,
    #[display(fmt = "vigenere-decrypt")]
    VigenereDecrypt,
    #[display(fmt = "caesar-encrypt")]
    CaesarEncrypt,
    #[display(fmt = "caesar-decrypt")]
    CaesarDecrypt,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::VigenereEncrypt,
        Operation::VigenereDecrypt,
        Operation::CaesarEncrypt,
        Operation::CaesarDecrypt,
    ];

    pub fn is_encrypt(&self) -> bool {
        matches!(self, Operation::VigenereEncrypt | Operation::CaesarEncrypt)
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
#[display(fmt = "unknown operation {}", _0)]
pub struct UnknownOperation(pub String);

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.to_string() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

#[cfg(test)]
mod operation_test {
    use super::{Args, Operation};
    use std::ffi::OsString;

    fn raw(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_arguments_are_taken_verbatim() {
        for message in ["--help", "-h", "--", "-V"] {
            let args = Args::try_from_raw(raw(&["prog", "caesar-encrypt", "3", message])).unwrap();
            assert_eq!(args.message, message);
        }
        let args = Args::try_from_raw(raw(&["prog", "-x", "--", "-3"])).unwrap();
        assert_eq!(args.operation, "-x");
        assert_eq!(args.key, "--");
        assert_eq!(args.message, "-3");
    }

    #[test]
    fn test_argument_count_is_exact() {
        assert!(Args::try_from_raw(raw(&["prog", "caesar-encrypt", "--", "3", "HELLO"])).is_err());
        assert!(Args::try_from_raw(raw(&["prog", "--help"])).is_err());
        assert!(Args::try_from_raw(raw(&["prog", "caesar-encrypt", "3"])).is_err());
        assert!(Args::try_from_raw(raw(&["prog"])).is_err());
    }

    #[test]
    fn test_operation_names() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
        assert!("caesar".parse::<Operation>().is_err());
        assert!("CAESAR-ENCRYPT".parse::<Operation>().is_err());
    }
}
