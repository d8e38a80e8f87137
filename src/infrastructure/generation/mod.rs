//! Target renderers for the generation IR

pub mod cpp_renderer;
pub mod renderer_factory;
pub mod rust_renderer;

pub use cpp_renderer::CppRenderer;
pub use renderer_factory::select_renderer;
pub use rust_renderer::RustRenderer;
