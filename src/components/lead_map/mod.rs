mod component;
mod data;
mod interaction;
mod loader;
mod metrics;
mod panels;
mod projection;
mod render;
mod state;
mod topology;
mod types;

pub use component::LeadMap;
