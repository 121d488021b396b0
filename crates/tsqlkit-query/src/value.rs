//! Parameter values.
//!
//! This module provides the value types that travel alongside rendered text:
//!
//! - [`Value`]: A nullable SQL value
//! - [`IntoValue`]: Conversion trait from Rust types into [`Value`]
//! - [`ParamType`]: Declared SQL type tag of a binding
//! - [`Param`]: A value with its declared type and optional size hint
//! - [`IntoParam`]: Conversion trait used by filter constructors

mod core;
mod param;

pub use self::core::Value;
pub use self::param::{IntoParam, Param, ParamType};

/// Conversion trait for SQL values.
pub trait IntoValue {
	/// Convert into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(Some(self))
				}
			}

			impl IntoValue for Option<$ty> {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}

			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					value.into_value()
				}
			}
		)*
	};
}

impl_into_value!(
	bool => Bool,
	u8 => TinyUnsigned,
	i16 => SmallInt,
	i32 => Int,
	i64 => BigInt,
	f32 => Float,
	f64 => Double,
	char => Char,
);

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

impl IntoValue for Option<String> {
	fn into_value(self) -> Value {
		Value::String(self.map(Box::new))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		Value::String(self.map(|s| Box::new(s.to_string())))
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self)))
	}
}

impl IntoValue for Option<Vec<u8>> {
	fn into_value(self) -> Value {
		Value::Bytes(self.map(Box::new))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		value.into_value()
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		value.into_value()
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		value.into_value()
	}
}

#[cfg(feature = "with-chrono")]
mod chrono_impls {
	use super::{IntoValue, Value};

	macro_rules! impl_boxed_into_value {
		($($ty:ty => $variant:ident),* $(,)?) => {
			$(
				impl IntoValue for $ty {
					fn into_value(self) -> Value {
						Value::$variant(Some(Box::new(self)))
					}
				}

				impl IntoValue for Option<$ty> {
					fn into_value(self) -> Value {
						Value::$variant(self.map(Box::new))
					}
				}
			)*
		};
	}

	impl_boxed_into_value!(
		chrono::NaiveDate => ChronoDate,
		chrono::NaiveTime => ChronoTime,
		chrono::NaiveDateTime => ChronoDateTime,
		chrono::DateTime<chrono::FixedOffset> => ChronoDateTimeWithTimeZone,
	);
}

#[cfg(feature = "with-uuid")]
impl IntoValue for uuid::Uuid {
	fn into_value(self) -> Value {
		Value::Uuid(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-rust_decimal")]
impl IntoValue for rust_decimal::Decimal {
	fn into_value(self) -> Value {
		Value::Decimal(Some(Box::new(self)))
	}
}
