//! Box information operations

mod about;

pub use about::{AboutInfo, AboutOperation};
