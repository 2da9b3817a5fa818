//! Inbound events: slash commands and button actions, parsed from raw text and callback data.

use country_storage::{Country, Region};

use crate::format;

/// Parsed inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(Command),
    Callback(Action),
}

impl Event {
    /// Parses a text message. Returns `None` for anything that is not a slash command.
    pub fn from_text(text: &str) -> Option<Self> {
        Command::parse(text).map(Event::Command)
    }

    /// Parses button callback data; unrecognized data becomes [`Action::Unknown`].
    pub fn from_callback(data: &str) -> Self {
        Event::Callback(Action::parse(data))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// `/European_countries`
    ListAll,
    Regions,
    /// Any other `/<token>`: the token is a country key.
    Country(String),
}

impl Command {
    /// Parses `/name`, `/name@bot` or `/name args`. Returns `None` for non-commands and a bare `/`.
    pub fn parse(text: &str) -> Option<Self> {
        let token = text.trim().strip_prefix('/')?;
        let token = token.split_whitespace().next()?;
        let name = token.split('@').next().unwrap_or(token);
        if name.is_empty() {
            return None;
        }

        Some(match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "European_countries" => Command::ListAll,
            "regions" => Command::Regions,
            key => Command::Country(key.to_string()),
        })
    }
}

/// Callback data prefix for region buttons.
pub const REGION_PREFIX: &str = "region_";

/// Button action sent back by Telegram as callback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Region(Region),
    /// `region_<code>` with a code outside the known set.
    UnknownRegion(String),
    Field(Field),
    All,
    Change,
    Unknown(String),
}

impl Action {
    pub fn parse(data: &str) -> Self {
        if let Some(code) = data.strip_prefix(REGION_PREFIX) {
            return match Region::from_code(code) {
                Some(region) => Action::Region(region),
                None => Action::UnknownRegion(code.to_string()),
            };
        }

        match data {
            "all" => Action::All,
            "change" => Action::Change,
            other => match Field::from_action(other) {
                Some(field) => Action::Field(field),
                None => Action::Unknown(other.to_string()),
            },
        }
    }

    /// Callback data for a region button.
    pub fn region_data(region: Region) -> String {
        format!("{}{}", REGION_PREFIX, region.code())
    }
}

/// A single country field that can be requested with a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capital,
    Population,
    Area,
    Density,
    Percentage,
    Borders,
}

impl Field {
    /// Fixed reply order, also used for the "all fields" reply.
    pub const ALL: [Field; 6] = [
        Field::Capital,
        Field::Population,
        Field::Area,
        Field::Density,
        Field::Percentage,
        Field::Borders,
    ];

    /// Callback data identifying the field.
    pub fn action(self) -> &'static str {
        match self {
            Field::Capital => "capital",
            Field::Population => "population",
            Field::Area => "area",
            Field::Density => "density",
            Field::Percentage => "percentage",
            Field::Borders => "borders",
        }
    }

    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.action() == action)
    }

    /// Short label for the inline button.
    pub fn button_label(self) -> &'static str {
        match self {
            Field::Capital => "Столица",
            Field::Population => "Население",
            Field::Area => "Площадь",
            Field::Density => "Плотность",
            Field::Percentage => "% от Европы",
            Field::Borders => "Границы",
        }
    }

    /// Label used in replies.
    pub fn label(self) -> &'static str {
        match self {
            Field::Capital => "Столица",
            Field::Population => "Население",
            Field::Area => "Площадь",
            Field::Density => "Плотность населения",
            Field::Percentage => "% от населения Европы",
            Field::Borders => "Граничит с",
        }
    }

    /// Formatted value of this field for `country`.
    pub fn render(self, country: &Country) -> String {
        match self {
            Field::Capital => format::format_capital(country.capital.as_deref()),
            Field::Population => format::format_population(country.population),
            Field::Area => format::format_area(country.area),
            Field::Density => format::format_density(country.density),
            Field::Percentage => format::format_percentage(country.percentage),
            Field::Borders => format::format_borders(country.borders.as_deref()),
        }
    }
}
