// Purpose - external interfaces, table formats in and out

pub mod export;
pub mod table;

pub use export::{OutputTable, Rendered};
pub use table::{Record, Table};
