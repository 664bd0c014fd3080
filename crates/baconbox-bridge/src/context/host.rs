use super::HostError;

/// Renderable-type capability bit a configuration must advertise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RenderableType(pub i32);

impl RenderableType {
    pub const OPENGL_ES: Self = Self(0x0001);
    pub const OPENGL_ES2: Self = Self(0x0004);
    pub const OPENGL: Self = Self(0x0008);
    pub const OPENGL_ES3: Self = Self(0x0040);

    #[inline]
    pub fn bits(self) -> i32 {
        self.0
    }
}

/// Configuration requirements passed to [`GraphicsHost::choose_config`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConfigRequest {
    pub renderable_type: RenderableType,

    /// Number of candidates requested from the host. Always one; there is no
    /// search across several matching configurations.
    pub candidates: usize,
}

impl ConfigRequest {
    pub fn new(renderable_type: RenderableType) -> Self {
        Self {
            renderable_type,
            candidates: 1,
        }
    }
}

/// Host graphics system (an EGL-shaped API).
///
/// Handles are plain copyable values owned by the caller; the host does not
/// track them. Every call is made from the thread that owns the
/// [`GraphicsContextManager`](super::GraphicsContextManager).
pub trait GraphicsHost: Send + 'static {
    /// On-screen target a surface can be created for.
    type Drawable: Clone + Send + 'static;
    type Display: Copy;
    type Config: Copy;
    type Context: Copy;
    type Surface: Copy;

    /// Opens and initializes the default display.
    fn open_display(&mut self) -> Result<Self::Display, HostError>;

    /// Returns the first configuration matching `request`, if any.
    fn choose_config(
        &mut self,
        display: Self::Display,
        request: &ConfigRequest,
    ) -> Result<Option<Self::Config>, HostError>;

    fn create_context(
        &mut self,
        display: Self::Display,
        config: Self::Config,
    ) -> Result<Self::Context, HostError>;

    fn create_window_surface(
        &mut self,
        display: Self::Display,
        config: Self::Config,
        drawable: &Self::Drawable,
    ) -> Result<Self::Surface, HostError>;

    /// Binds display, surface and context to the calling thread.
    fn make_current(
        &mut self,
        display: Self::Display,
        surface: Self::Surface,
        context: Self::Context,
    ) -> Result<(), HostError>;

    /// Unbinds whatever is current on the calling thread.
    fn release_current(&mut self, display: Self::Display) -> Result<(), HostError>;

    /// Waits for native (window system) rendering to complete.
    fn wait_native(&mut self) -> Result<(), HostError>;

    /// Waits for submitted client API commands to complete.
    fn wait_client(&mut self) -> Result<(), HostError>;

    fn swap_buffers(
        &mut self,
        display: Self::Display,
        surface: Self::Surface,
    ) -> Result<(), HostError>;

    fn destroy_surface(
        &mut self,
        display: Self::Display,
        surface: Self::Surface,
    ) -> Result<(), HostError>;

    fn destroy_context(
        &mut self,
        display: Self::Display,
        context: Self::Context,
    ) -> Result<(), HostError>;

    fn terminate(&mut self, display: Self::Display) -> Result<(), HostError>;
}
