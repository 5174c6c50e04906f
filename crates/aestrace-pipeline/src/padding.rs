//! PKCS#7 padding for 16-byte blocks.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Outcome of padding removal.
///
/// Invalid padding is not an error: the buffer comes back untouched so the
/// caller decides what to do with it, instead of the strip silently
/// corrupting data or silently succeeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unpadded {
    /// Padding was valid and has been removed.
    Stripped(Vec<u8>),
    /// Padding validation failed; the buffer is returned unstripped.
    Invalid(Vec<u8>),
}

/// Appends PKCS#7 padding up to the next multiple of [`BLOCK_SIZE`].
///
/// The pad length is always in 1..=16; input that is already block-aligned
/// gains a full block of `0x10` bytes.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Validates and strips PKCS#7 padding.
///
/// The final byte `n` must be in 1..=16 and the last `n` bytes must all
/// equal `n`; anything else yields [`Unpadded::Invalid`] with the input
/// unmodified.
pub fn unpad(mut data: Vec<u8>) -> Unpadded {
    let Some(&last) = data.last() else {
        return Unpadded::Invalid(data);
    };
    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Unpadded::Invalid(data);
    }
    if data[data.len() - pad_len..].iter().any(|&byte| byte != last) {
        return Unpadded::Invalid(data);
    }
    data.truncate(data.len() - pad_len);
    Unpadded::Stripped(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_length_is_always_one_to_sixteen() {
        for len in 0..=32usize {
            let data = vec![0xaa; len];
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            let pad_len = padded.len() - len;
            assert!((1..=BLOCK_SIZE).contains(&pad_len));
            assert!(padded[len..].iter().all(|&b| usize::from(b) == pad_len));
        }
    }

    #[test]
    fn pad_unpad_round_trips() {
        for len in 0..=32usize {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(unpad(pad(&data)), Unpadded::Stripped(data));
        }
    }

    #[test]
    fn corrupted_padding_returns_buffer_unstripped() {
        let mut padded = pad(b"attack at dawn");
        let len = padded.len();
        padded[len - 1] = 0x00;
        assert_eq!(unpad(padded.clone()), Unpadded::Invalid(padded));

        let mut padded = pad(b"attack at dawn");
        padded[len - 2] ^= 0xff;
        assert_eq!(unpad(padded.clone()), Unpadded::Invalid(padded));

        // Pad byte larger than the block size.
        let bogus = vec![0x11; 16];
        assert_eq!(unpad(bogus.clone()), Unpadded::Invalid(bogus));

        assert_eq!(unpad(Vec::new()), Unpadded::Invalid(Vec::new()));
    }
}
