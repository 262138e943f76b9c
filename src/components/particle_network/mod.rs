mod component;
mod render;
mod state;
mod types;

pub use component::ParticleNetworkCanvas;
pub use types::{ColorScheme, NetworkConfig, Rgb};
