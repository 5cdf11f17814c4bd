//! Chain flags as a closed, enum-keyed record.
//!
//! Flags default to unset; querying a flag that was never set is safe by
//! construction and reports `false`. Setting is idempotent.

/// The flags a chain can accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Negate every subsequent terminal in the chain.
    Negate,
    /// Terminals measure the target's length instead of the target itself.
    Length,
    /// The target is a filesystem path to a file.
    File,
    /// The target is a filesystem path to a directory.
    Directory,
    /// The target holds JSON data. Set-but-inert; no terminal consumes it.
    Json,
    /// The target holds XML data. Set-but-inert; no terminal consumes it.
    Xml,
    /// Ordering matters for the target. Set-but-inert; no terminal consumes it.
    Ordered,
    /// Set by the zero-argument `contain` form. Inert; kept for compatibility.
    Contain,
}

/// Flag record for one chain. All flags start unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    negate: bool,
    length: bool,
    file: bool,
    directory: bool,
    json: bool,
    xml: bool,
    ordered: bool,
    contain: bool,
}

impl Flags {
    /// Set a flag. Re-setting an already-set flag is a no-op.
    pub fn set(&mut self, flag: Flag) {
        match flag {
            Flag::Negate => self.negate = true,
            Flag::Length => self.length = true,
            Flag::File => self.file = true,
            Flag::Directory => self.directory = true,
            Flag::Json => self.json = true,
            Flag::Xml => self.xml = true,
            Flag::Ordered => self.ordered = true,
            Flag::Contain => self.contain = true,
        }
    }

    /// Whether a flag has been set on this chain.
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::Negate => self.negate,
            Flag::Length => self.length,
            Flag::File => self.file,
            Flag::Directory => self.directory,
            Flag::Json => self.json,
            Flag::Xml => self.xml,
            Flag::Ordered => self.ordered,
            Flag::Contain => self.contain,
        }
    }
}
