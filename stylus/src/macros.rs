// Shorthand for return Err(StylusError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)         -> return Err(StylusError::new(ErrorKind::Variant))
// - err!(Variant(reason)) -> return Err(StylusError::new(ErrorKind::Variant(reason)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::StylusError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($reason:expr),+ $(,)?)) => {
		return Err(crate::error::StylusError::new(
			crate::error::ErrorKind::$variant($($reason),+),
		))
	};
}

pub(crate) use err;
