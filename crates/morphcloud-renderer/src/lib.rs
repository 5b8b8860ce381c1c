pub mod camera;
pub mod cloud;
pub mod gpu;
pub mod perf;
pub mod render_state;

pub use camera::OrbitCamera;
pub use cloud::CloudPipeline;
pub use gpu::{GpuContext, GpuUniforms, RendererError};
pub use perf::FrameTimer;
pub use render_state::RenderState;
