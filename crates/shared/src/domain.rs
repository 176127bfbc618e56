use std::{fmt, hash::Hash};

use serde::{Deserialize, Serialize};

/// Number of rows the list is created with. Fixed for the lifetime of a list.
pub const ROW_COUNT: u32 = 40;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(RowNumber);

/// A single list entry. Identity and equality key off `number` only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Row {
    pub number: RowNumber,
    pub checked: bool,
}

impl Row {
    pub fn unchecked(number: RowNumber) -> Self {
        Self {
            number,
            checked: false,
        }
    }

    pub fn label(&self) -> String {
        format!("Row {}", self.number)
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}
