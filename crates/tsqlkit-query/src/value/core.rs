//! Core Value enum definition.

/// Core value representation for statement parameters.
///
/// Every variant wraps an `Option`: `None` is a typed SQL `NULL`. Values are
/// never written into statement text; they travel alongside it as
/// [`ParameterBinding`](crate::backend::ParameterBinding)s.
///
/// ## Example
///
/// ```rust
/// use tsqlkit_query::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// let string_val = Value::String(Some(Box::new("hello".to_string())));
/// assert!(null_int.is_null());
/// assert!(!int_val.is_null() && !string_val.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	// -------------------------------------------------------------------------
	// Primitive types (inline, not boxed)
	// -------------------------------------------------------------------------
	/// Boolean value (`bit`)
	Bool(Option<bool>),
	/// 8-bit unsigned integer (`tinyint`)
	TinyUnsigned(Option<u8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),

	// -------------------------------------------------------------------------
	// Heap-allocated types (boxed for size optimization)
	// -------------------------------------------------------------------------
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),

	// -------------------------------------------------------------------------
	// Feature-gated types: chrono
	// -------------------------------------------------------------------------
	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveTime
	#[cfg(feature = "with-chrono")]
	ChronoTime(Option<Box<chrono::NaiveTime>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
	/// Chrono DateTime with fixed offset timezone
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeWithTimeZone(Option<Box<chrono::DateTime<chrono::FixedOffset>>>),

	// -------------------------------------------------------------------------
	// Feature-gated types: uuid
	// -------------------------------------------------------------------------
	/// UUID value (`uniqueidentifier`)
	#[cfg(feature = "with-uuid")]
	Uuid(Option<Box<uuid::Uuid>>),

	// -------------------------------------------------------------------------
	// Feature-gated types: decimal
	// -------------------------------------------------------------------------
	/// Rust Decimal value
	#[cfg(feature = "with-rust_decimal")]
	Decimal(Option<Box<rust_decimal::Decimal>>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// # Example
	///
	/// ```rust
	/// use tsqlkit_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyUnsigned(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeWithTimeZone(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-rust_decimal")]
			Self::Decimal(v) => v.is_none(),
		}
	}
}

impl Default for Value {
	/// Returns the default value, which is a null string.
	fn default() -> Self {
		Self::String(None)
	}
}
