pub mod code_window;
pub mod light_lines;
pub mod particle_network;
pub mod portfolio;
pub mod toast;
