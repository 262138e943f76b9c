mod card;
mod drawer;

pub use drawer::PortfolioDrawer;
