pub mod io_utils;
pub mod link_utils;
pub mod logger_utils;
