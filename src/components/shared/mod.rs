pub mod project_card;
pub mod search_bar;

pub use project_card::ProjectCard;
pub use search_bar::SearchBar;
