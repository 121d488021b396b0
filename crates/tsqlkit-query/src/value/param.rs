//! Typed parameters.
//!
//! A [`Param`] is a [`Value`] plus the declared type tag and optional size
//! hint the execution layer needs to build a native parameter object. The
//! tag and size never influence rendered text.

use std::fmt;
use std::str::FromStr;

use super::{IntoValue, Value};
use crate::error::QueryError;

/// Declared SQL type of a parameter binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
	/// `bit`
	Bit,
	/// `tinyint`
	TinyInt,
	/// `smallint`
	SmallInt,
	/// `int`
	Int,
	/// `bigint`
	BigInt,
	/// `real`
	Real,
	/// `float`
	Float,
	/// `decimal`
	Decimal,
	/// `char`
	Char,
	/// `nchar`
	NChar,
	/// `varchar`
	VarChar,
	/// `nvarchar`
	NVarChar,
	/// `varbinary`
	VarBinary,
	/// `date`
	Date,
	/// `time`
	Time,
	/// `datetime2`
	DateTime2,
	/// `datetimeoffset`
	DateTimeOffset,
	/// `uniqueidentifier`
	UniqueIdentifier,
}

impl ParamType {
	/// Returns the SQL name of this type.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bit => "bit",
			Self::TinyInt => "tinyint",
			Self::SmallInt => "smallint",
			Self::Int => "int",
			Self::BigInt => "bigint",
			Self::Real => "real",
			Self::Float => "float",
			Self::Decimal => "decimal",
			Self::Char => "char",
			Self::NChar => "nchar",
			Self::VarChar => "varchar",
			Self::NVarChar => "nvarchar",
			Self::VarBinary => "varbinary",
			Self::Date => "date",
			Self::Time => "time",
			Self::DateTime2 => "datetime2",
			Self::DateTimeOffset => "datetimeoffset",
			Self::UniqueIdentifier => "uniqueidentifier",
		}
	}

	/// Infer the declared type from a value's variant.
	pub fn infer(value: &Value) -> Self {
		match value {
			Value::Bool(_) => Self::Bit,
			Value::TinyUnsigned(_) => Self::TinyInt,
			Value::SmallInt(_) => Self::SmallInt,
			Value::Int(_) => Self::Int,
			Value::BigInt(_) => Self::BigInt,
			Value::Float(_) => Self::Real,
			Value::Double(_) => Self::Float,
			Value::Char(_) => Self::NChar,
			Value::String(_) => Self::NVarChar,
			Value::Bytes(_) => Self::VarBinary,
			#[cfg(feature = "with-chrono")]
			Value::ChronoDate(_) => Self::Date,
			#[cfg(feature = "with-chrono")]
			Value::ChronoTime(_) => Self::Time,
			#[cfg(feature = "with-chrono")]
			Value::ChronoDateTime(_) => Self::DateTime2,
			#[cfg(feature = "with-chrono")]
			Value::ChronoDateTimeWithTimeZone(_) => Self::DateTimeOffset,
			#[cfg(feature = "with-uuid")]
			Value::Uuid(_) => Self::UniqueIdentifier,
			#[cfg(feature = "with-rust_decimal")]
			Value::Decimal(_) => Self::Decimal,
		}
	}

	const ALL: [Self; 18] = [
		Self::Bit,
		Self::TinyInt,
		Self::SmallInt,
		Self::Int,
		Self::BigInt,
		Self::Real,
		Self::Float,
		Self::Decimal,
		Self::Char,
		Self::NChar,
		Self::VarChar,
		Self::NVarChar,
		Self::VarBinary,
		Self::Date,
		Self::Time,
		Self::DateTime2,
		Self::DateTimeOffset,
		Self::UniqueIdentifier,
	];
}

impl fmt::Display for ParamType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ParamType {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| QueryError::InvalidTag {
				kind: "parameter type",
				value: s.to_string(),
			})
	}
}

/// A value together with its declared type and optional size hint.
///
/// # Example
///
/// ```rust
/// use tsqlkit_query::{Param, ParamType};
///
/// let inferred = Param::from("Buchanan");
/// assert_eq!(inferred.param_type(), ParamType::NVarChar);
///
/// let explicit = Param::typed(ParamType::VarChar, "Buchanan").size(50);
/// assert_eq!(explicit.param_type(), ParamType::VarChar);
/// assert_eq!(explicit.size_hint(), Some(50));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
	value: Value,
	param_type: ParamType,
	size: Option<usize>,
}

impl Param {
	/// Create a parameter with an explicit type tag.
	pub fn typed<V: IntoValue>(param_type: ParamType, value: V) -> Self {
		Self {
			value: value.into_value(),
			param_type,
			size: None,
		}
	}

	/// Attach a size hint (length for strings and binaries, precision for decimals).
	#[must_use]
	pub fn size(mut self, size: usize) -> Self {
		self.size = Some(size);
		self
	}

	/// Returns the bound value.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Returns the declared type.
	pub fn param_type(&self) -> ParamType {
		self.param_type
	}

	/// Returns the size hint, if any.
	pub fn size_hint(&self) -> Option<usize> {
		self.size
	}
}

impl From<Value> for Param {
	fn from(value: Value) -> Self {
		Self {
			param_type: ParamType::infer(&value),
			value,
			size: None,
		}
	}
}

/// Conversion trait for anything usable as a statement parameter.
///
/// Plain Rust values convert with an inferred [`ParamType`]; [`Param`]
/// passes through unchanged so explicit type tags survive.
pub trait IntoParam {
	/// Convert into a typed parameter.
	fn into_param(self) -> Param;
}

impl IntoParam for Param {
	fn into_param(self) -> Param {
		self
	}
}

impl IntoParam for Value {
	fn into_param(self) -> Param {
		Param::from(self)
	}
}

macro_rules! impl_into_param {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoParam for $ty {
				fn into_param(self) -> Param {
					Param::from(self.into_value())
				}
			}

			impl IntoParam for Option<$ty> {
				fn into_param(self) -> Param {
					Param::from(self.into_value())
				}
			}

			impl From<$ty> for Param {
				fn from(value: $ty) -> Self {
					Param::from(value.into_value())
				}
			}
		)*
	};
}

impl_into_param!(bool, u8, i16, i32, i64, f32, f64, char, String, &str, Vec<u8>);
