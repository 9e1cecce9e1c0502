use arcstr::ArcStr;

/// Shared immutable string used for every text attribute of a record.
pub type SeqStr = ArcStr;

/// Placeholder written in the `Upstream`/`Downstream` columns when no
/// antitoxin was found on that side.
pub const ABSENT_SEQ: &str = "-";

pub fn is_absent(value: &str) -> bool { value == ABSENT_SEQ }
