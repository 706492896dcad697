pub mod article;
pub mod file_name;

pub use article::{ArticleId, ArticleMetadata, FileDescriptor};
pub use file_name::sanitize_file_name;
