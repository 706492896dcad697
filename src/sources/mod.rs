pub mod traits;
pub mod figshare;

pub use traits::ArticleSource;
pub use figshare::FigshareSource;
