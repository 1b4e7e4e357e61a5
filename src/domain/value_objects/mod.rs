pub mod resolved_path;

pub use resolved_path::ResolvedPath;
