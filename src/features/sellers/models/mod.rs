mod seller;

pub use seller::{NewSeller, Seller};
