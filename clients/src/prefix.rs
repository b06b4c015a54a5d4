//! Network prefix handling.
//!
//! Addresses are often written with a network tag in front, such as
//! `S-K37B-9V85-FB95-793HN`. The tag must be removed before decoding:
//! letters like `S` and `T` are alphabet symbols and would otherwise be
//! read as part of the address.

/// Prefixes recognised when none are configured.
pub const DEFAULT_PREFIXES: &[&str] = &["S-", "BURST-", "TS-"];

/// Removes network prefixes from address text.
#[derive(Debug, Clone)]
pub struct PrefixStripper {
    prefixes: Vec<String>,
}

impl Default for PrefixStripper {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().map(|p| p.to_string()))
    }
}

impl PrefixStripper {
    /// Builds a stripper for the given prefixes. Matching is
    /// case-insensitive, and longer prefixes are tried first.
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(|p| p.trim().to_ascii_uppercase())
            .filter(|p| !p.is_empty())
            .collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        prefixes.dedup();
        Self { prefixes }
    }

    /// Default prefixes plus `extra`.
    pub fn with_extra(extra: impl IntoIterator<Item = String>) -> Self {
        Self::new(
            DEFAULT_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .chain(extra),
        )
    }

    /// Returns `text` without surrounding whitespace and without the first
    /// matching prefix. Only one prefix is removed.
    ///
    /// # Example
    ///
    /// ```
    /// use rsaddr_clients::prefix::PrefixStripper;
    ///
    /// let strip = PrefixStripper::default();
    /// assert_eq!(strip.strip(" BURST-K37B-9V85-FB95-793HN "), "K37B-9V85-FB95-793HN");
    /// assert_eq!(strip.strip("s-K37B-9V85-FB95-793HN"), "K37B-9V85-FB95-793HN");
    /// assert_eq!(strip.strip("K37B-9V85-FB95-793HN"), "K37B-9V85-FB95-793HN");
    /// ```
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        let text = text.trim();
        for prefix in &self.prefixes {
            if let Some(head) = text.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) {
                    return &text[prefix.len()..];
                }
            }
        }
        text
    }

    /// The configured prefixes, longest first.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        let strip = PrefixStripper::new(["S-".to_string(), "TS-".to_string()]);
        assert_eq!(strip.strip("TS-2222-2222-2222-22222"), "2222-2222-2222-22222");
    }

    #[test]
    fn extra_prefixes_are_added() {
        let strip = PrefixStripper::with_extra(["signum-".to_string()]);
        assert_eq!(strip.strip("SIGNUM-2222"), "2222");
        assert_eq!(strip.strip("S-2222"), "2222");
    }

    #[test]
    fn only_one_prefix_is_removed() {
        let strip = PrefixStripper::default();
        assert_eq!(strip.strip("S-S-2222"), "S-2222");
    }

    #[test]
    fn multibyte_input_is_not_split() {
        let strip = PrefixStripper::default();
        assert_eq!(strip.strip("⠑⠑"), "⠑⠑");
    }

    #[test]
    fn prefixes_are_deduplicated() {
        let strip = PrefixStripper::with_extra(["s-".to_string(), " ".to_string()]);
        assert_eq!(strip.prefixes(), ["BURST-", "TS-", "S-"]);
    }
}
