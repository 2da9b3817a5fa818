//! The closed set of regions used to group countries.

use std::fmt;

/// A region of Europe. The display name is the exact value stored in the `region` column;
/// the code is used in button callback data (`region_<code>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    West,
    East,
    North,
    South,
}

impl Region {
    /// All regions in menu order.
    pub const ALL: [Region; 4] = [Region::West, Region::East, Region::North, Region::South];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::West => "Западная Европа",
            Region::East => "Восточная Европа",
            Region::North => "Северная Европа",
            Region::South => "Южная Европа",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Region::West => "west_europe",
            Region::East => "east_europe",
            Region::North => "north_europe",
            Region::South => "south_europe",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
