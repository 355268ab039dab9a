/// Errors that can occur when loading or querying an electrode layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The requested landmark name is not part of the layout.
    ///
    /// This is a configuration error: a validated layout contains every
    /// name the rest of the system refers to.
    #[error("landmark `{0}` is not part of the layout")]
    UnknownLandmark(String),

    /// Two layout points share the same name.
    #[error("duplicate landmark name `{0}` in layout table")]
    DuplicateLandmark(String),
}
