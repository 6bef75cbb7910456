pub mod breakpoint;
pub mod card_footer;
pub mod card_header;
pub mod conditions;
pub mod weather_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use breakpoint::{Breakpoint, NARROW_MAX_WIDTH, flow_pair};
pub use card_footer::{CardFooter, CardFooterProps};
pub use card_header::{CardHeader, CardHeaderProps};
pub use conditions::{Conditions, ConditionsProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
