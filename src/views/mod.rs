pub mod index;

pub use index::{stringify, IndexView};
