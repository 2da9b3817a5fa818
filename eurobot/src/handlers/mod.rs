//! Handler implementations: request logging and the country handler.

mod country_handler;
mod logging_handler;

pub use country_handler::CountryHandler;
pub use logging_handler::LoggingHandler;
