mod card_grid;
mod featured;
mod modal;
mod timeline;

pub use card_grid::CardGrid;
pub use featured::FeaturedCards;
pub use modal::ModalShell;
pub use timeline::TimelineView;
