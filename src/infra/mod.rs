//! Инфраструктурный слой вокруг движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - абстракция хранения записей партий;
//! - маппинги между API и domain.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
