pub mod output_dir;

pub use output_dir::{OutputDirectory, CHUNK_SIZE};
