//! Page components for Software Engineer Wrap.

mod create;
mod landing;
mod wrap;

pub use create::Create;
pub use landing::Landing;
pub use wrap::Wrap;
