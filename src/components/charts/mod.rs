//! SVG chart panels fed from fixed data arrays.

mod area;
mod bar;
mod energy;
mod geometry;
mod performance;
mod pie;
mod scale;
mod tooltip;

pub use area::TrendChart;
pub use bar::CampaignHealthChart;
pub use energy::CampaignModules;
pub use performance::SdrPerformance;
pub use pie::LeadSourcesChart;
