pub mod charts;
pub mod lead_map;
pub mod shell;
