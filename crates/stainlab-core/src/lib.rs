pub mod config;
pub mod consts;
pub mod display;
pub mod error;
pub mod io;
pub mod raster;
pub mod session;
pub mod stats;
