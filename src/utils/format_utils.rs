/// 1234567 -> "1,234,567"
pub fn fmt_num(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 1234567 -> "$1,234,567"
pub fn fmt_usd(n: u64) -> String {
    format!("${}", fmt_num(n))
}

/// Shortens an address or hash to `head...tail`. Strings that are already short come back as-is.
pub fn truncate_middle(s: &str, head: usize, tail: usize) -> String {
    let len = s.chars().count();
    if len <= head + tail + 3 {
        return s.to_string();
    }
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(len - tail).collect();
    format!("{}...{}", start, end)
}

/// The 10 + 8 shape used for every hash on the page.
pub fn truncate_hex(s: &str) -> String {
    truncate_middle(s, 10, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(fmt_num(0), "0");
        assert_eq!(fmt_num(999), "999");
        assert_eq!(fmt_num(1000), "1,000");
        assert_eq!(fmt_num(19_847_392), "19,847,392");
        assert_eq!(fmt_usd(997_500), "$997,500");
    }

    #[test]
    fn truncates_hashes() {
        let addr = format!("0x{}", "ab".repeat(20));
        let t = truncate_hex(&addr);
        assert_eq!(t, "0xabababab...abababab");
        assert_eq!(t.len(), 21);
        assert_eq!(truncate_hex("0x1234"), "0x1234");
    }
}
