//! Decoding of the server's one-character command flag strings.

use bitflags::bitflags;
use proxyparity_error::{ParityError, Result};

bitflags! {
    /// Behavioral category bits of a server command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CommandFlags: u16 {
        /// `w`: may modify the dataset.
        const WRITE = 1 << 0;
        /// `r`: never modifies the dataset.
        const READONLY = 1 << 1;
        /// `m`: may grow memory; refused when over the memory limit.
        const DENY_OOM = 1 << 2;
        /// `a`: administrative command.
        const ADMIN = 1 << 3;
        /// `p`: pub/sub related.
        const PUBSUB = 1 << 4;
        /// `f`: always propagated to replicas.
        const FORCE_REPLICATION = 1 << 5;
        /// `s`: not allowed from scripts.
        const NOSCRIPT = 1 << 6;
        /// `R`: non-deterministic result.
        const RANDOM = 1 << 7;
        /// `S`: output is sorted when called from scripts.
        const SORT_FOR_SCRIPT = 1 << 8;
        /// `l`: allowed while the dataset is loading.
        const LOADING = 1 << 9;
        /// `t`: allowed on a stale replica.
        const STALE = 1 << 10;
        /// `M`: not shown to MONITOR clients.
        const SKIP_MONITOR = 1 << 11;
        /// `k`: cluster ASKING semantics.
        const ASKING = 1 << 12;
    }
}

const CODES: [(char, CommandFlags); 13] = [
    ('w', CommandFlags::WRITE),
    ('r', CommandFlags::READONLY),
    ('m', CommandFlags::DENY_OOM),
    ('a', CommandFlags::ADMIN),
    ('p', CommandFlags::PUBSUB),
    ('f', CommandFlags::FORCE_REPLICATION),
    ('s', CommandFlags::NOSCRIPT),
    ('R', CommandFlags::RANDOM),
    ('S', CommandFlags::SORT_FOR_SCRIPT),
    ('l', CommandFlags::LOADING),
    ('t', CommandFlags::STALE),
    ('M', CommandFlags::SKIP_MONITOR),
    ('k', CommandFlags::ASKING),
];

impl CommandFlags {
    /// Flag bit for a single code character.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        CODES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, flag)| *flag)
    }

    /// Decode a flag string such as `"wm"` or `"rpslt"`.
    ///
    /// `command` is only used to make the error message useful.
    pub fn parse(command: &str, flags: &str) -> Result<Self> {
        let mut decoded = Self::empty();
        for code in flags.chars() {
            let Some(flag) = Self::from_code(code) else {
                return Err(ParityError::UnknownFlag {
                    command: command.to_owned(),
                    flags: flags.to_owned(),
                    flag: code,
                });
            };
            decoded |= flag;
        }
        Ok(decoded)
    }

    /// Re-encode as a flag string in canonical code order.
    #[must_use]
    pub fn to_codes(self) -> String {
        CODES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(code, _)| *code)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_codes() {
        let flags = CommandFlags::parse("SUBSCRIBE", "rpslt").expect("valid flags");
        assert!(flags.contains(CommandFlags::READONLY | CommandFlags::PUBSUB));
        assert!(flags.contains(CommandFlags::NOSCRIPT | CommandFlags::LOADING));
        assert!(flags.contains(CommandFlags::STALE));
        assert!(!flags.contains(CommandFlags::WRITE));
    }

    #[test]
    fn codes_are_case_sensitive() {
        let lower = CommandFlags::parse("X", "s").expect("valid");
        let upper = CommandFlags::parse("X", "S").expect("valid");
        assert_eq!(lower, CommandFlags::NOSCRIPT);
        assert_eq!(upper, CommandFlags::SORT_FOR_SCRIPT);
    }

    #[test]
    fn empty_string_is_no_flags() {
        assert_eq!(CommandFlags::parse("X", "").expect("valid"), CommandFlags::empty());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = CommandFlags::parse("GET", "rz").expect_err("z is not a flag");
        match err {
            ParityError::UnknownFlag { command, flag, .. } => {
                assert_eq!(command, "GET");
                assert_eq!(flag, 'z');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn to_codes_uses_canonical_order() {
        let flags = CommandFlags::parse("SPOP", "Rsw").expect("valid");
        assert_eq!(flags.to_codes(), "wsR");
    }
}
