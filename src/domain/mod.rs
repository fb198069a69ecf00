pub mod items;
pub mod master_data;
pub mod module;
pub mod result;
pub mod scenario;
