pub mod indicator;
pub mod money;
pub mod quote;
pub mod summary;

pub use indicator::Indicator;
pub use money::money;
pub use quote::Quote;
pub use summary::Summary;
