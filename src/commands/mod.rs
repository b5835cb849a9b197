mod dispatch;
mod list;
mod tokens;

pub use dispatch::*;
pub use list::*;
pub use tokens::*;
