//! Main menu: rendering and choice parsing.

use std::io::{self, Write};

pub const MENU_LINES: [&str; 5] = [
    "Select an option:",
    "1. Create Transaction",
    "2. Delete Transaction",
    "3. View History of Transactions",
    "4. Cancel (Exit Program)",
];

pub const CHOICE_PROMPT: &str = "Your choice: ";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    CreateOrder,
    DeleteOrder,
    ListOrders,
    Exit,
}

impl MenuChoice {
    /// Map a trimmed menu answer to a choice. Anything but `1`..`4` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::CreateOrder),
            "2" => Some(MenuChoice::DeleteOrder),
            "3" => Some(MenuChoice::ListOrders),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    for line in MENU_LINES {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
