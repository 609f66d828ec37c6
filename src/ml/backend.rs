// ============================================================
// Layer 5 - Backend Selection
// ============================================================
// The CLI runs on ndarray (CPU) by default. Building with
// `--features wgpu` moves it to the GPU backend instead.
// Library users pick their own backend; nothing in ml::highway
// depends on these aliases.

#[cfg(not(feature = "wgpu"))]
pub type AppBackend = burn::backend::NdArray;

#[cfg(feature = "wgpu")]
pub type AppBackend = burn::backend::Wgpu;

pub type AppDevice = <AppBackend as burn::tensor::backend::Backend>::Device;

/// The device the CLI creates tensors on.
pub fn app_device() -> AppDevice {
    AppDevice::default()
}
