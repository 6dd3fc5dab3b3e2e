use std::fmt;

use pirenea_core::setup::SetupCode;

/// Per-file skip condition reported during a rename pass. Notices are not
/// errors; the walk continues after each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameNotice {
    AlreadyTagged { name: String },
    NotTagged { name: String, code: SetupCode },
}

impl fmt::Display for RenameNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameNotice::AlreadyTagged { name } => {
                write!(f, "File {name} already has a prefix.")
            }
            RenameNotice::NotTagged { name, code } => {
                write!(f, "File {name} does not begin with prefix {code}.")
            }
        }
    }
}

pub trait NoticeSink {
    fn notice(&mut self, notice: RenameNotice);
}

/// Prints one line per notice, for interactive use.
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notice(&mut self, notice: RenameNotice) {
        println!("{notice}");
    }
}

impl NoticeSink for Vec<RenameNotice> {
    fn notice(&mut self, notice: RenameNotice) {
        self.push(notice);
    }
}
