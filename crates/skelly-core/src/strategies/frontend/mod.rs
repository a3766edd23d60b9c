//! Frontend strategies. Everything they generate lives under `frontend/`,
//! and all of them install with the default `npm install`.

mod angular;
mod lit;
mod react;

pub use angular::AngularFrontend;
pub use lit::LitFrontend;
pub use react::ReactFrontend;
