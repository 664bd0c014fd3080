use crate::context::RenderableType;

/// Per-variant bridge configuration.
///
/// The BaconBox and RedBox engines share the whole bridge; they differ only in
/// the names below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Name of the native library the engine ships in.
    pub library_name: String,

    /// Log target used for every bridge message.
    pub log_tag: String,

    /// Name given to the engine thread.
    pub thread_name: String,

    /// Renderable-type bit a configuration must advertise.
    pub renderable_type: RenderableType,
}

impl BridgeConfig {
    pub fn baconbox() -> Self {
        Self::named("BaconBox")
    }

    pub fn redbox() -> Self {
        Self::named("RedBox")
    }

    /// Builds a configuration following the `<Name>App` / `<Name>Thread`
    /// naming used by both engine variants.
    pub fn named(name: &str) -> Self {
        Self {
            library_name: format!("{name}App"),
            log_tag: name.to_string(),
            thread_name: format!("{name}Thread"),
            renderable_type: RenderableType::OPENGL_ES,
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.log_tag
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::baconbox()
    }
}
