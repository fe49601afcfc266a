pub mod aggregate;
pub mod dataset;
pub mod flows;
pub mod format;
pub mod geometry;
pub mod platform;
pub mod sankey;
pub mod scale;
pub mod selection;
pub mod survey;
pub mod timing;
