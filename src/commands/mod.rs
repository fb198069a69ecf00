pub mod base_commands;
pub mod calculate_cmd;
pub mod export_cmd;
pub mod report_format;
