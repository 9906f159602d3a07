pub mod cache_writer;
pub mod sync;
