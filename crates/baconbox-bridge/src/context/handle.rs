use super::GraphicsHost;

/// Display, surface and context of a live rendering context.
///
/// A handle only exists once all three have been created and bound, so a
/// partially initialized context is unrepresentable.
pub struct ContextHandle<H: GraphicsHost> {
    pub display: H::Display,
    pub surface: H::Surface,
    pub context: H::Context,
}

impl<H: GraphicsHost> Clone for ContextHandle<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: GraphicsHost> Copy for ContextHandle<H> {}
