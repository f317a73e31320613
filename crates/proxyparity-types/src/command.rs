//! Server command metadata and key-position resolution.
//!
//! Positions follow the server's convention: index 0 is the command name,
//! `first_key == 0` means the command touches no keys, and a negative
//! `last_key` counts back from the end of the argument vector (`-1` is the
//! last argument, `-2` the one before it).

use proxyparity_error::{ParityError, Result};
use serde::{Deserialize, Serialize};

use crate::flags::CommandFlags;

/// Per-command override of how keys are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyExtractor {
    /// Keys come from `first_key..=last_key` by `key_step`.
    Positional,
    /// Positional, but the keys are not loaded ahead of execution.
    NoPreload,
    /// Positional source and destination of a rename.
    Rename,
    /// Argument 2 is a key count; that many keys follow from argument 3.
    NumKeys,
}

impl KeyExtractor {
    /// Whether the server skips these keys when preloading.
    #[must_use]
    pub const fn skips_preload(self) -> bool {
        matches!(self, Self::NoPreload)
    }
}

/// One row of the server command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerCommand {
    pub name: &'static str,
    /// Argument count including the command name; negative means "at least".
    pub arity: i32,
    /// One-character flag codes, see [`CommandFlags`].
    pub flags: &'static str,
    pub extractor: KeyExtractor,
    pub first_key: i32,
    pub last_key: i32,
    pub key_step: i32,
}

impl ServerCommand {
    /// Table-row constructor, in the column order of the server's own table.
    #[must_use]
    pub const fn new(
        name: &'static str,
        arity: i32,
        flags: &'static str,
        extractor: KeyExtractor,
        first_key: i32,
        last_key: i32,
        key_step: i32,
    ) -> Self {
        Self {
            name,
            arity,
            flags,
            extractor,
            first_key,
            last_key,
            key_step,
        }
    }

    /// Whether the table marks at least one key argument.
    #[must_use]
    pub const fn addresses_keys(&self) -> bool {
        self.first_key != 0
    }

    /// Exactly one key, at argument 1.
    #[must_use]
    pub const fn is_single_key(&self) -> bool {
        self.first_key == 1 && self.last_key == 1
    }

    pub fn command_flags(&self) -> Result<CommandFlags> {
        CommandFlags::parse(self.name, self.flags)
    }

    /// Arity rule: exact for a positive arity, minimum for a negative one.
    #[must_use]
    pub const fn accepts_argc(&self, argc: usize) -> bool {
        let required = self.arity.unsigned_abs() as usize;
        if self.arity >= 0 {
            argc == required
        } else {
            argc >= required
        }
    }

    /// Argument positions a router would hash for `argv`.
    ///
    /// `argv[0]` is the command name. Positions past the end of `argv` are
    /// never produced.
    pub fn key_positions<A: AsRef<[u8]>>(&self, argv: &[A]) -> Result<Vec<usize>> {
        let argc = argv.len();
        if !self.accepts_argc(argc) {
            return Err(ParityError::ArityMismatch {
                command: self.name.to_owned(),
                arity: self.arity,
                argc,
            });
        }

        match self.extractor {
            KeyExtractor::NumKeys => self.numkeys_positions(argv),
            KeyExtractor::Positional | KeyExtractor::NoPreload | KeyExtractor::Rename => {
                Ok(self.positional_positions(argc))
            }
        }
    }

    fn positional_positions(&self, argc: usize) -> Vec<usize> {
        if self.first_key <= 0 || self.key_step <= 0 {
            return Vec::new();
        }
        let argc_i64 = argc as i64;
        let mut last = i64::from(self.last_key);
        if last < 0 {
            last += argc_i64;
        }
        let last = last.min(argc_i64 - 1);

        let mut positions = Vec::new();
        let mut index = i64::from(self.first_key);
        while index <= last {
            positions.push(index as usize);
            index += i64::from(self.key_step);
        }
        positions
    }

    fn numkeys_positions<A: AsRef<[u8]>>(&self, argv: &[A]) -> Result<Vec<usize>> {
        let Some(raw) = argv.get(2) else {
            return Err(self.invalid_key_count("missing numkeys argument"));
        };
        let text = std::str::from_utf8(raw.as_ref())
            .map_err(|_| self.invalid_key_count("numkeys is not valid UTF-8"))?;
        let count: usize = text
            .parse()
            .map_err(|_| self.invalid_key_count(format!("numkeys '{text}' is not a count")))?;

        let end = 3usize
            .checked_add(count)
            .ok_or_else(|| self.invalid_key_count("numkeys overflows"))?;
        if end > argv.len() {
            return Err(self.invalid_key_count(format!(
                "numkeys={count} but only {} arguments follow",
                argv.len().saturating_sub(3)
            )));
        }
        Ok((3..end).collect())
    }

    fn invalid_key_count(&self, detail: impl Into<String>) -> ParityError {
        ParityError::InvalidKeyCount {
            command: self.name.to_owned(),
            detail: detail.into(),
        }
    }
}
