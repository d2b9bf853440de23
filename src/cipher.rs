use derive_more::Display;
use num::{Integer, Signed};

/// Common errors for ciphers
#[derive(Debug, Display, PartialEq, Eq)]
pub enum CipherError {
    #[display(fmt = "range upper bound {} is not above lower bound {}", high, low)]
    InvalidRange { low: u8, high: u8 },
    #[display(fmt = "key is empty")]
    EmptyKey,
    #[display(fmt = "key character {} is outside the range", _0)]
    KeyOutOfRange(u8),
}

impl std::error::Error for CipherError {}

pub trait Cipher {
    fn encrypt(&self, message: &[u8]) -> Vec<u8>;
    fn decrypt(&self, cipher_text: &[u8]) -> Vec<u8>;
}

/// Contiguous span of byte ordinals subject to transformation.
/// Everything outside of it is copied through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRange {
    low: u8,
    high: u8,
}

impl CharRange {
    /// Uppercase latin letters, `'A'..='Z'`
    pub const UPPERCASE: CharRange = CharRange {
        low: b'A',
        high: b'Z',
    };

    pub fn new(low: u8, high: u8) -> Result<Self, CipherError> {
        if high <= low {
            Err(CipherError::InvalidRange { low, high })
        } else {
            Ok(Self { low, high })
        }
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    pub fn size(&self) -> usize {
        usize::from(self.high - self.low) + 1
    }

    pub fn contains(&self, ch: u8) -> bool {
        (self.low..=self.high).contains(&ch)
    }
}

/// Modulo whose result is never negative, whatever the sign of `a`.
#[inline]
pub fn absmod<A: Integer + Signed + Copy>(a: A, m: A) -> A {
    a.mod_floor(&m)
}

/// Shifts `ch` by `shift` positions inside `range`, wrapping around its ends.
/// Bytes outside the range are returned as is.
pub fn shift_byte(range: CharRange, shift: i64, ch: u8) -> u8 {
    if !range.contains(ch) {
        return ch;
    }
    let size = range.size() as i64;
    let offset = i64::from(ch - range.low);
    // always in [0, size), so it fits between low and high
    let shifted = absmod(offset + absmod(shift, size), size);
    range.low + shifted as u8
}

/// Caesar cipher
/// https://en.wikipedia.org/wiki/Caesar_cipher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaesarCipher {
    range: CharRange,
    /// key reduced into [0, range size)
    shift: i64,
}

impl CaesarCipher {
    /// Any integer is a valid key; keys congruent modulo the range size are equivalent.
    pub fn new(range: CharRange, key: i64) -> Self {
        Self {
            range,
            shift: absmod(key, range.size() as i64),
        }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn encrypt_byte(&self, ch: u8) -> u8 {
        shift_byte(self.range, self.shift, ch)
    }

    pub fn decrypt_byte(&self, ch: u8) -> u8 {
        shift_byte(self.range, -self.shift, ch)
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, message: &[u8]) -> Vec<u8> {
        message.iter().map(|&ch| self.encrypt_byte(ch)).collect()
    }

    fn decrypt(&self, cipher_text: &[u8]) -> Vec<u8> {
        cipher_text.iter().map(|&ch| self.decrypt_byte(ch)).collect()
    }
}

#[cfg(test)]
mod caesar_cipher_test {
    use super::{absmod, CaesarCipher, CharRange, Cipher, CipherError};

    #[test]
    fn test_absmod() {
        assert_eq!(absmod(-2, 7), 5);
        assert_eq!(absmod(-9, 7), 5);
        assert_eq!(absmod(-51, 7), 5);
        assert_eq!(absmod(12, 7), 5);
        assert_eq!(absmod(i64::MIN, 26), 18);
    }

    #[test]
    fn test_range_must_ascend() {
        assert_eq!(
            CharRange::new(b'Z', b'A'),
            Err(CipherError::InvalidRange {
                low: b'Z',
                high: b'A'
            })
        );
        assert!(CharRange::new(b'A', b'A').is_err());
        assert_eq!(CharRange::new(b'A', b'Z').unwrap(), CharRange::UPPERCASE);
        assert_eq!(CharRange::UPPERCASE.size(), 26);
    }

    #[test]
    fn test_caesar_hello_world() {
        let cipher = CaesarCipher::new(CharRange::UPPERCASE, 3);
        let cipher_text = cipher.encrypt(b"HELLOWORLD");
        assert_eq!(cipher_text, b"KHOORZRUOG");
        assert_eq!(cipher.decrypt(&cipher_text), b"HELLOWORLD");
        let inverse = CaesarCipher::new(CharRange::UPPERCASE, -3);
        assert_eq!(inverse.encrypt(&cipher_text), b"HELLOWORLD");
    }

    #[test]
    fn test_caesar_wraps_key() {
        assert_eq!(CaesarCipher::new(CharRange::UPPERCASE, -3).shift(), 23);
        assert_eq!(CaesarCipher::new(CharRange::UPPERCASE, 29).shift(), 3);
        assert_eq!(CaesarCipher::new(CharRange::UPPERCASE, 26).shift(), 0);
        let big = CaesarCipher::new(CharRange::UPPERCASE, i64::from(i32::MAX));
        let small = CaesarCipher::new(CharRange::UPPERCASE, i64::from(i32::MAX % 26));
        assert_eq!(big.encrypt(b"XYZ"), small.encrypt(b"XYZ"));
    }

    #[test]
    fn test_caesar_passes_through_out_of_range() {
        let cipher = CaesarCipher::new(CharRange::UPPERCASE, 1);
        assert_eq!(cipher.encrypt(b"Hello, World! Z"), b"Iello, Xorld! A");
        assert_eq!(cipher.encrypt("É".as_bytes()), "É".as_bytes());
        assert!(cipher.encrypt(b"").is_empty());
    }

    #[test]
    fn test_caesar_custom_range() {
        let digits = CharRange::new(b'0', b'9').unwrap();
        let cipher = CaesarCipher::new(digits, 4);
        assert_eq!(cipher.encrypt(b"0789-x"), b"4123-x");
        assert_eq!(cipher.decrypt(b"4123-x"), b"0789-x");
    }
}

/// Vigenere cipher
/// https://en.wikipedia.org/wiki/Vigen%C3%A8re_cipher
#[derive(Clone, Debug)]
pub struct VigenereCipher {
    range: CharRange,
    /// one caesar shift per key character
    shifts: Vec<CaesarCipher>,
}

impl VigenereCipher {
    /// Key must be non-empty and lie entirely inside `range`.
    pub fn new(range: CharRange, key: impl AsRef<[u8]>) -> Result<Self, CipherError> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let shifts = key
            .iter()
            .map(|&k| {
                if range.contains(k) {
                    Ok(CaesarCipher::new(range, i64::from(k - range.low)))
                } else {
                    Err(CipherError::KeyOutOfRange(k))
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { range, shifts })
    }

    /// The key cursor lives only for the duration of one call and moves
    /// on in-range bytes only.
    fn apply(&self, data: &[u8], transform: impl Fn(&CaesarCipher, u8) -> u8) -> Vec<u8> {
        let mut cursor = self.shifts.iter().cycle();
        data.iter()
            .copied()
            .map(|ch| {
                if !self.range.contains(ch) {
                    return ch;
                }
                match cursor.next() {
                    Some(caesar) => transform(caesar, ch),
                    None => ch,
                }
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, message: &[u8]) -> Vec<u8> {
        self.apply(message, CaesarCipher::encrypt_byte)
    }

    fn decrypt(&self, cipher_text: &[u8]) -> Vec<u8> {
        self.apply(cipher_text, CaesarCipher::decrypt_byte)
    }
}
