//! Screen navigation

mod router;
mod traits;

pub use router::Router;
pub use traits::Navigator;

#[cfg(test)]
pub use traits::MockNavigator;
