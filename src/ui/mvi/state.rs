/// Marker trait for state objects.
///
/// States are cloned to produce new ones, compared to detect changes, and
/// start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
