pub mod planning;
pub mod report;
pub mod server;
