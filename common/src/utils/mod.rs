pub mod consts;
pub mod input_handler;
pub mod json_parser;
pub mod position;
