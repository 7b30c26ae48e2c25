//! Menu options and their rendering.

use std::io::{self, Write};

const BANNER_WIDTH: usize = 50;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    LoadFile,
    InsertRecord,
    ShowTop,
    RemoveTop,
    ListAll,
    Exit,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [MenuOption; 6] = [
        MenuOption::LoadFile,
        MenuOption::InsertRecord,
        MenuOption::ShowTop,
        MenuOption::RemoveTop,
        MenuOption::ListAll,
        MenuOption::Exit,
    ];

    /// Number typed by the user to pick this option.
    pub fn number(self) -> u32 {
        match self {
            MenuOption::LoadFile => 1,
            MenuOption::InsertRecord => 2,
            MenuOption::ShowTop => 3,
            MenuOption::RemoveTop => 4,
            MenuOption::ListAll => 5,
            MenuOption::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::LoadFile => "Load loads from CSV file",
            MenuOption::InsertRecord => "Insert new load",
            MenuOption::ShowTop => "Show highest priority load",
            MenuOption::RemoveTop => "Remove highest priority load",
            MenuOption::ListAll => "List all loads by priority",
            MenuOption::Exit => "Exit",
        }
    }

    /// Parses a user answer such as `" 3 "`. Returns `None` for anything else.
    pub fn parse(answer: &str) -> Option<Self> {
        let n: u32 = answer.trim().parse().ok()?;
        Self::ALL.into_iter().find(|opt| opt.number() == n)
    }
}

/// Writes the menu followed by the choice prompt.
pub(crate) fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "    LOAD DISTRIBUTION SYSTEM")?;
    writeln!(out, "{rule}")?;
    for option in MenuOption::ALL {
        writeln!(out, "{} - {}", option.number(), option.label())?;
    }
    writeln!(out, "{rule}")?;
    write!(out, "Choose an option: ")?;
    out.flush()
}
