pub mod ban;
pub mod event;
pub mod keywords;
pub mod log;
pub mod resolver;
pub mod roster;
pub mod spec_parser;
