pub mod card;
pub mod sub;

pub use card::*;
pub use sub::*;
