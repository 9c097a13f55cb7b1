pub mod intersect;

/// Element type accepted by the intersection variants.
///
/// Only fixed-width unsigned integers qualify.
pub trait Element: num::PrimInt + num::Unsigned {}

impl<T> Element for T where T: num::PrimInt + num::Unsigned {}
