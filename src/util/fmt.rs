use std::fmt::{self, Debug, Formatter, LowerHex, Octal};

/// Debug-prints a preformatted value verbatim, without the quotes a `String` would get.
pub(crate) struct DebugRaw(pub String);

impl DebugRaw {
    pub(crate) fn hex<T: LowerHex>(value: T) -> DebugRaw {
        DebugRaw(format!("0x{value:x}"))
    }

    pub(crate) fn octal<T: Octal>(value: T) -> DebugRaw {
        DebugRaw(format!("0o{value:o}"))
    }
}

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
