pub mod crop;
pub mod export;
pub mod image_io;
