pub mod block;
pub mod ec_level;

pub use block::CodewordBlock;
pub use ec_level::ECLevel;
