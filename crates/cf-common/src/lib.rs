pub mod api;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod scoring;
pub mod tokenize;
pub mod vocabulary;

pub use filter::FilterEngine;
pub use vocabulary::RoleVocabulary;
