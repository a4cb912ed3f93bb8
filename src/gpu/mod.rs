//! GPU resource management for the viewer.
//!
//! Provides wgpu device/surface initialization and the single draw pass
//! that renders the controlled box.

/// Box mesh, uniforms, and render pipeline.
pub mod box_pass;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
