use crate::LoadError;

/// Conversion from whatever a load operation returns into the `Result`
/// carried by [`LoadAction::ReceiveLoaded`](crate::LoadAction::ReceiveLoaded).
pub trait IntoLoadResult<T, E> {
    fn into_load_result(self) -> Result<T, E>;
}

impl<T, E> IntoLoadResult<T, E> for Result<T, E> {
    fn into_load_result(self) -> Result<T, E> {
        self
    }
}

/// `None` is reported as [`LoadError::Missing`].
impl<T, E> IntoLoadResult<T, E> for Option<T>
where
    E: From<LoadError>,
{
    fn into_load_result(self) -> Result<T, E> {
        self.ok_or_else(|| E::from(LoadError::Missing))
    }
}
