pub mod carto;
pub mod sim;
pub mod vars;
