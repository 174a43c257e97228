mod interface;
mod system;
mod tick;

pub use interface::*;
pub use system::*;
pub use tick::*;
