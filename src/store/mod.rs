pub use clock::*;
pub use collection::*;
pub use entity_store::*;
pub use ids::*;
pub use seed::*;

mod clock;
mod collection;
mod entity_store;
mod ids;
mod seed;
