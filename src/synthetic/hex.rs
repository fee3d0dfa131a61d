//! Fabricated identifiers. Not unique by construction and not secure.
use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub const ADDRESS_HEX_LEN: usize = 40;
pub const TX_HASH_HEX_LEN: usize = 64;

/// `len` lowercase hex characters drawn uniformly from `rng`.
pub fn generate_hex<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
        .collect()
}

/// `0x` + 40 hex chars
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}", generate_hex(rng, ADDRESS_HEX_LEN))
}

/// `0x` + 64 hex chars
pub fn generate_transaction_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}", generate_hex(rng, TX_HASH_HEX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn hex_has_requested_length_and_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for len in [0, 1, 7, 40, 64, 200] {
            let h = generate_hex(&mut rng, len);
            assert_eq!(h.len(), len);
            assert!(is_lower_hex(&h));
        }
    }

    #[test]
    fn address_and_hash_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let addr = generate_address(&mut rng);
            assert_eq!(addr.len(), 42);
            assert!(addr.starts_with("0x"));
            assert!(is_lower_hex(&addr[2..]));

            let tx = generate_transaction_hash(&mut rng);
            assert_eq!(tx.len(), 66);
            assert!(tx.starts_with("0x"));
            assert!(is_lower_hex(&tx[2..]));
        }
    }

    #[test]
    fn same_seed_same_output() {
        let a = generate_address(&mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_address(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_digit_shows_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let h = generate_hex(&mut rng, 4096);
        for d in HEX_DIGITS.iter() {
            assert!(h.as_bytes().contains(d), "missing {}", *d as char);
        }
    }
}
