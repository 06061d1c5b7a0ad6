use crate::error::ConfigError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::fmt;
use std::str::FromStr;

/// Alphabet of the base62 encoding, ordered by digit value.
const BASE62_CHARS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Extra bytes drawn for base62 so that keeping the low digits stays close
/// to uniform.
const BASE62_EXTRA_BYTES: usize = 2;

/// Alphabet used for the random segment of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// Lowercase hexadecimal digits.
    #[default]
    Hex,
    /// URL-safe base64 (`-` and `_`), without padding.
    #[cfg_attr(feature = "serde", serde(alias = "base64"))]
    Base64Url,
    /// `0-9A-Za-z`.
    Base62,
}

impl Encoding {
    /// Upper bound of the entropy carried by one output character.
    fn bits_per_char(self) -> usize {
        match self {
            Encoding::Hex => 4,
            Encoding::Base64Url | Encoding::Base62 => 6,
        }
    }

    /// Number of random bytes needed to produce `chars` output characters.
    pub fn byte_len(self, chars: usize) -> usize {
        let len = (chars * self.bits_per_char()).div_ceil(8);
        match self {
            Encoding::Base62 => len + BASE62_EXTRA_BYTES,
            Encoding::Hex | Encoding::Base64Url => len,
        }
    }

    /// Encode `bytes` into exactly `len` characters of this alphabet.
    ///
    /// `bytes` must hold at least [`byte_len(len)`](Encoding::byte_len) bytes.
    pub fn encode(self, bytes: &[u8], len: usize) -> String {
        match self {
            Encoding::Hex => {
                let mut out = hex::encode(bytes);
                out.truncate(len);
                out
            }
            Encoding::Base64Url => {
                let mut out = URL_SAFE_NO_PAD.encode(bytes);
                out.truncate(len);
                out
            }
            Encoding::Base62 => base62_fixed(bytes, len),
        }
    }

    /// Returns true if `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            Encoding::Hex => matches!(c, '0'..='9' | 'a'..='f'),
            Encoding::Base64Url => c.is_ascii_alphanumeric() || c == '-' || c == '_',
            Encoding::Base62 => c.is_ascii_alphanumeric(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Hex => "hex",
            Encoding::Base64Url => "base64url",
            Encoding::Base62 => "base62",
        })
    }
}

impl FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64url" | "base64" => Ok(Encoding::Base64Url),
            "base62" => Ok(Encoding::Base62),
            _ => Err(ConfigError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Base62 digits of the big-endian number in `bytes`, least significant first.
fn base62_digits(bytes: &[u8]) -> Vec<u8> {
    let mut num: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
    let mut digits = Vec::with_capacity(bytes.len() * 2);
    while !num.is_empty() {
        let mut rem: u32 = 0;
        let mut quotient = Vec::with_capacity(num.len());
        for &b in &num {
            let acc = (rem << 8) | u32::from(b);
            let q = acc / 62;
            rem = acc % 62;
            // acc < 62 * 256, so q always fits in a byte
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }
        digits.push(BASE62_CHARS[rem as usize]);
        num = quotient;
    }
    digits
}

/// Base62 rendering of `bytes` padded with `'0'` on the left, or cut down to
/// its `len` least significant digits.
fn base62_fixed(bytes: &[u8], len: usize) -> String {
    let mut out: Vec<u8> = base62_digits(bytes).into_iter().take(len).collect();
    out.resize(len, BASE62_CHARS[0]);
    out.into_iter().rev().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base62_small_values() {
        assert_eq!(Encoding::Base62.encode(&[61], 1), "z");
        assert_eq!(Encoding::Base62.encode(&[62], 2), "10");
        assert_eq!(Encoding::Base62.encode(&[1, 0], 3), "048");
    }

    #[test]
    fn base62_pads_short_numbers() {
        assert_eq!(Encoding::Base62.encode(&[0, 0, 0], 4), "0000");
        assert_eq!(Encoding::Base62.encode(&[0, 0, 7], 5), "00007");
    }

    #[test]
    fn base62_keeps_least_significant_digits() {
        // 0xffff = 65535 = 17 * 62^2 + 3 * 62 + 1 -> "H31"
        assert_eq!(Encoding::Base62.encode(&[0xff, 0xff], 3), "H31");
        assert_eq!(Encoding::Base62.encode(&[0xff, 0xff], 2), "31");
    }

    #[test]
    fn hex_and_base64url_truncate() {
        assert_eq!(Encoding::Hex.encode(&[0xde, 0xad, 0xbe], 5), "deadb");
        assert_eq!(Encoding::Base64Url.encode(&[0xfb, 0xff, 0xbf], 4), "-_-_");
        assert_eq!(Encoding::Base64Url.encode(&[0xfb, 0xff, 0xbf], 3), "-_-");
    }

    #[test]
    fn byte_len_covers_requested_width() {
        for len in 1..64 {
            for enc in [Encoding::Hex, Encoding::Base64Url, Encoding::Base62] {
                let bytes = vec![0xa5; enc.byte_len(len)];
                assert_eq!(enc.encode(&bytes, len).len(), len, "{enc} / {len}");
            }
        }
    }

    #[test]
    fn base62_draws_enough_bytes_to_bound_bias() {
        assert_eq!(Encoding::Base62.byte_len(1), 3);
        assert_eq!(Encoding::Hex.byte_len(1), 1);
        assert_eq!(Encoding::Base64Url.byte_len(1), 1);

        // every output value must be hit by at least 2^12 inputs, which
        // bounds the modulo bias below 1/4096
        for len in 1..=13u32 {
            let bits = 8 * Encoding::Base62.byte_len(len as usize) as u32;
            let inputs = 1u128 << bits;
            let outputs = 62u128.pow(len);
            assert!(inputs / outputs >= 1 << 12, "len {len}: {bits} bits");
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("hex".parse::<Encoding>(), Ok(Encoding::Hex));
        assert_eq!("Base64".parse::<Encoding>(), Ok(Encoding::Base64Url));
        assert_eq!("base64url".parse::<Encoding>(), Ok(Encoding::Base64Url));
        assert_eq!("BASE62".parse::<Encoding>(), Ok(Encoding::Base62));
        assert_eq!(
            "base32".parse::<Encoding>(),
            Err(ConfigError::UnknownEncoding("base32".into()))
        );
        for enc in [Encoding::Hex, Encoding::Base64Url, Encoding::Base62] {
            assert_eq!(enc.to_string().parse::<Encoding>(), Ok(enc));
        }
    }
}
