pub mod config;
pub mod consts;
pub mod error;
pub mod green_mo;
pub mod handler;
pub mod maps;
pub mod position_query;
pub mod presets;
pub mod pushover;
pub mod server;
pub mod spirii;

#[cfg(test)]
pub(crate) mod test_support;
