pub mod registry;

pub use registry::{DirectoryList, Registry, DEFAULT_TAG};
