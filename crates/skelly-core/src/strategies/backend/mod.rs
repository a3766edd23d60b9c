//! Backend strategies. Everything they generate lives under `server/`.

mod django;
mod express;
mod java_spring;

pub use django::DjangoBackend;
pub use express::ExpressBackend;
pub use java_spring::JavaSpringBackend;
