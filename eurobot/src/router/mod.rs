//! Command/callback router: resolves events against the country store and renders replies.
//!
//! The router never fails: storage errors become the "storage unavailable" text, lookup misses become
//! "not found" texts, unknown actions get a fixed fallback.

mod event;
pub mod texts;

pub use event::{Action, Command, Event, Field, REGION_PREFIX};

use std::sync::Arc;

use country_storage::{Country, CountrySource, CountrySummary, Region};
use eurobot_core::{Button, Keyboard};
use tracing::{info, instrument, warn};

use crate::selection::SelectionStore;

/// How a reply reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// New message in the chat.
    Send,
    /// Replace the text of the message whose button was pressed.
    Edit,
    /// Short notification attached to the button press.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    pub delivery: Delivery,
}

impl Reply {
    pub fn send(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            delivery: Delivery::Send,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
            delivery: Delivery::Send,
        }
    }

    pub fn edit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            delivery: Delivery::Edit,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            delivery: Delivery::Notice,
        }
    }
}

/// Routes events for all chats. Owns the per-chat [`SelectionStore`].
pub struct CountryRouter {
    source: Arc<dyn CountrySource>,
    selections: SelectionStore,
}

impl CountryRouter {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self::with_selections(source, SelectionStore::new())
    }

    pub fn with_selections(source: Arc<dyn CountrySource>, selections: SelectionStore) -> Self {
        Self { source, selections }
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    #[instrument(skip(self))]
    pub async fn route(&self, chat_id: i64, event: Event) -> Reply {
        match event {
            Event::Command(command) => self.on_command(chat_id, command).await,
            Event::Callback(action) => self.on_action(chat_id, action).await,
        }
    }

    async fn on_command(&self, chat_id: i64, command: Command) -> Reply {
        match command {
            Command::Start => match self.source.exists().await {
                Ok(true) => Reply::send(texts::WELCOME),
                Ok(false) | Err(_) => Reply::send(texts::STORAGE_UNAVAILABLE),
            },
            Command::Help => Reply::send(texts::HELP),
            Command::ListAll => match self.source.list_all().await {
                Ok(countries) if countries.is_empty() => Reply::send(texts::DATABASE_EMPTY),
                Ok(countries) => Reply::send(render_all_countries(&countries)),
                Err(_) => Reply::send(texts::STORAGE_UNAVAILABLE),
            },
            Command::Regions => Reply::with_keyboard(texts::CHOOSE_REGION, region_keyboard()),
            Command::Country(key) => self.select_country(chat_id, &key).await,
        }
    }

    async fn select_country(&self, chat_id: i64, key: &str) -> Reply {
        match self.source.get_by_key(key).await {
            Ok(Some(country)) => {
                self.selections.select(chat_id, key).await;
                info!(chat_id = chat_id, key = %key, "Country selected");
                Reply::with_keyboard(texts::selected(&country.name), field_keyboard())
            }
            Ok(None) => Reply::send(texts::not_found(key)),
            Err(_) => Reply::send(texts::STORAGE_UNAVAILABLE),
        }
    }

    async fn on_action(&self, chat_id: i64, action: Action) -> Reply {
        let action = match action {
            Action::Region(region) => return self.list_region(region).await,
            Action::UnknownRegion(code) => {
                warn!(chat_id = chat_id, code = %code, "Unknown region code");
                return Reply::notice(texts::region_empty(texts::UNKNOWN_REGION));
            }
            other => other,
        };

        let Some(key) = self.selections.get(chat_id).await else {
            return Reply::notice(texts::SELECT_FIRST);
        };

        let country = match self.source.get_by_key(&key).await {
            Ok(Some(country)) => country,
            Ok(None) => return Reply::notice(texts::COUNTRY_GONE),
            Err(_) => return Reply::notice(texts::STORAGE_UNAVAILABLE),
        };

        match action {
            Action::Change => Reply::edit(texts::CHOOSE_ANOTHER),
            Action::All => Reply::edit(render_full_info(&country)),
            Action::Field(field) => Reply::edit(render_field(&country, field)),
            Action::Unknown(data) => {
                warn!(chat_id = chat_id, data = %data, "Unknown callback action");
                Reply::edit(texts::UNKNOWN_REQUEST)
            }
            Action::Region(_) | Action::UnknownRegion(_) => Reply::edit(texts::UNKNOWN_REQUEST),
        }
    }

    async fn list_region(&self, region: Region) -> Reply {
        match self.source.list_by_region(region.display_name()).await {
            Ok(countries) if countries.is_empty() => {
                Reply::notice(texts::region_empty(region.display_name()))
            }
            Ok(countries) => Reply::edit(render_region(region, &countries)),
            Err(_) => Reply::notice(texts::STORAGE_UNAVAILABLE),
        }
    }
}

/// Eight follow-up buttons shown after a country is selected, two per row.
pub fn field_keyboard() -> Keyboard {
    let mut buttons: Vec<Button> = Field::ALL
        .into_iter()
        .map(|f| Button::new(f.button_label(), f.action()))
        .collect();
    buttons.push(Button::new(texts::ALL_BUTTON, "all"));
    buttons.push(Button::new(texts::CHANGE_BUTTON, "change"));
    Keyboard::from_buttons(buttons, 2)
}

/// One button per region.
pub fn region_keyboard() -> Keyboard {
    let buttons = Region::ALL
        .into_iter()
        .map(|r| Button::new(r.display_name(), Action::region_data(r)))
        .collect();
    Keyboard::from_buttons(buttons, 2)
}

fn country_line(indent: &str, country: &CountrySummary) -> String {
    format!("{}• /{} - {}\n", indent, country.english_name, country.name)
}

/// Countries grouped under region headers, keeping the input order (region, then name).
fn render_all_countries(countries: &[CountrySummary]) -> String {
    let mut text = String::from("ВСЕ СТРАНЫ ЕВРОПЫ:\n\n");
    let mut current_region: Option<&str> = None;

    for country in countries {
        if current_region != Some(country.region.as_str()) {
            if current_region.is_some() {
                text.push('\n');
            }
            text.push_str(&country.region);
            text.push_str(":\n");
            current_region = Some(country.region.as_str());
        }
        text.push_str(&country_line("   ", country));
    }

    text
}

fn render_region(region: Region, countries: &[CountrySummary]) -> String {
    let mut text = format!("СТРАНЫ {}:\n\n", region.display_name());
    for country in countries {
        text.push_str(&country_line("", country));
    }
    text
}

fn render_field(country: &Country, field: Field) -> String {
    format!("{} {}:\n{}", field.label(), country.name, field.render(country))
}

/// Every field with its label in fixed order, then the region.
fn render_full_info(country: &Country) -> String {
    let mut text = format!("ПОЛНАЯ ИНФОРМАЦИЯ О {}:\n\n", country.name);
    for field in Field::ALL {
        text.push_str(&format!("{}: {}\n", field.label(), field.render(country)));
    }
    text.push_str(&format!("\nРегион: {}", country.region));
    text
}
