//! Codec register profiles.
//!
//! A profile is an ordered list of `(address, value)` pairs describing a
//! codec register state, closed by a sentinel entry whose address is
//! [`SENTINEL_ADDR`]. Table order is authoritative: a later entry for the
//! same address overrides an earlier one, so entries are never sorted or
//! merged.

/// Address that terminates a profile. Never a valid codec register.
pub const SENTINEL_ADDR: u8 = 0xFF;

/// One register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterEntry {
    /// Register address.
    pub addr: u8,
    /// Value to write.
    pub value: u8,
}

impl RegisterEntry {
    /// The terminating entry.
    pub const END: Self = Self {
        addr: SENTINEL_ADDR,
        value: SENTINEL_ADDR,
    };

    /// Entry writing `value` to `addr`.
    pub const fn new(addr: u8, value: u8) -> Self {
        Self { addr, value }
    }

    /// `true` if this entry terminates a profile.
    pub const fn is_sentinel(&self) -> bool {
        self.addr == SENTINEL_ADDR
    }
}

/// A named, sentinel-terminated register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterProfile {
    name: &'static str,
    table: &'static [RegisterEntry],
}

impl RegisterProfile {
    /// Wrap `table` as a profile called `name`.
    ///
    /// The table should contain a sentinel; [`is_terminated`](Self::is_terminated)
    /// lets static profiles assert this at compile time. Applying an
    /// unterminated table stops at the end of the slice.
    pub const fn new(name: &'static str, table: &'static [RegisterEntry]) -> Self {
        Self { name, table }
    }

    /// Profile name, for logging.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `true` if the table contains a sentinel entry.
    pub const fn is_terminated(&self) -> bool {
        let mut rest = self.table;
        while let [entry, tail @ ..] = rest {
            if entry.is_sentinel() {
                return true;
            }
            rest = tail;
        }
        false
    }

    /// Number of entries before the sentinel.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// `true` if the profile writes nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in program order, up to but excluding the sentinel.
    pub fn entries(&self) -> impl Iterator<Item = RegisterEntry> + 'static {
        self.table
            .iter()
            .copied()
            .take_while(|entry| !entry.is_sentinel())
    }

    /// Last value this profile leaves in `addr`, if it writes it at all.
    pub fn final_value(&self, addr: u8) -> Option<u8> {
        self.entries()
            .filter(|entry| entry.addr == addr)
            .last()
            .map(|entry| entry.value)
    }
}
