#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scenario;
pub mod scene;
pub mod utils;

pub use animation::{AnimationDriver, DrawSet, FramePlan, PhaseBank};
pub use app::App;
pub use assets::AssetServer;
pub use errors::AstrofallError;
pub use renderer::settings::RenderSettings;
pub use renderer::Renderer;
pub use resources::primitives::*;
pub use resources::{Geometry, Material};
pub use scenario::Scenario;
pub use scene::{Camera, Light, Node, SceneGraph};
