//! Change frequency hint.

use std::fmt;
use std::str::FromStr;

/// Accepted `<changefreq>` values, in protocol order.
pub const CHANGE_FREQUENCIES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    pub const fn as_str(self) -> &'static str {
        CHANGE_FREQUENCIES[self as usize]
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = String;

    /// Case-sensitive: `"Daily"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| format!("unknown change frequency: {s}"))
    }
}

impl From<ChangeFrequency> for String {
    fn from(freq: ChangeFrequency) -> Self {
        freq.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_table() {
        for (freq, name) in ChangeFrequency::ALL.iter().zip(CHANGE_FREQUENCIES) {
            assert_eq!(freq.as_str(), name);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("daily".parse::<ChangeFrequency>(), Ok(ChangeFrequency::Daily));
        assert_eq!("never".parse::<ChangeFrequency>(), Ok(ChangeFrequency::Never));
        assert!("Daily".parse::<ChangeFrequency>().is_err());
        assert!("biweekly".parse::<ChangeFrequency>().is_err());
        assert!("".parse::<ChangeFrequency>().is_err());
    }

    #[test]
    fn test_into_string() {
        let s: String = ChangeFrequency::Weekly.into();
        assert_eq!(s, "weekly");
        assert_eq!(ChangeFrequency::Monthly.to_string(), "monthly");
    }
}
