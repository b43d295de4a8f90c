//! FileSystem abstraction for testable file operations

mod mock;
mod real;
mod rooted;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::FileSystem;
pub use real::RealFileSystem;
pub use rooted::RootedFileSystem;
