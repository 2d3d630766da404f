pub mod common;
pub mod convert;
pub mod detect;
pub mod platforms;
