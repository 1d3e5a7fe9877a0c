mod product;
mod showcase;
mod tuner;

pub use showcase::Showcase;
pub use tuner::Tuner;
