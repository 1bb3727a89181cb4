//! Type tags and rendered property values.
//!
//! Every descriptor records a [`TypeTag`] chosen at registration time. The
//! tag's [`PropertyKind`] selects the rendering path, so printing is an
//! exhaustive `match` instead of a comparison against type-name strings.

use core::fmt;

/// The closed set of value kinds a registry knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A signed 32-bit integer.
    Integer,
    /// A single-precision float.
    Float,
    /// An owned text string.
    Text,
    /// Any other field type. Listed, never rendered.
    Unrecognized,
}

impl PropertyKind {
    /// Returns `true` if values of this kind are rendered by the registry.
    #[must_use]
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// Kind plus display label for a registered field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    kind: PropertyKind,
    name: &'static str,
}

impl TypeTag {
    /// Creates a tag from a kind and a display label.
    #[must_use]
    pub const fn new(kind: PropertyKind, name: &'static str) -> Self {
        Self { kind, name }
    }

    /// Tag for a field type the registry does not render.
    ///
    /// The label is the full type path of `F`.
    #[must_use]
    pub fn unrecognized<F: ?Sized + 'static>() -> Self {
        Self::new(PropertyKind::Unrecognized, core::any::type_name::<F>())
    }

    /// The rendering kind.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The label printed after `Type:`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value read from live field storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// Value of a [`PropertyKind::Integer`] field.
    Integer(i32),
    /// Value of a [`PropertyKind::Float`] field.
    Float(f32),
    /// Value of a [`PropertyKind::Text`] field.
    Text(&'a str),
}

impl PropertyValue<'_> {
    /// The kind this value was read as.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Integer(_) => PropertyKind::Integer,
            Self::Float(_) => PropertyKind::Float,
            Self::Text(_) => PropertyKind::Text,
        }
    }
}

impl fmt::Display for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write_general(f, *value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Significant digits printed for floats.
const FLOAT_PRECISION: usize = 6;

/// Writes `value` the way C's `%g` does at the default precision.
///
/// Six significant digits, trailing zeros dropped. Exponents below -4 or at
/// least the precision switch to scientific notation with a signed,
/// two-digit exponent (`1.23457e+06`).
fn write_general(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // The exponent is taken after rounding, so 999999.7 becomes 1e+06.
    let scientific = format!("{:.*e}", FLOAT_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.write_str(&scientific);
    };

    if exponent < -4 || exponent >= FLOAT_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            f,
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (FLOAT_PRECISION as i32 - 1 - exponent) as usize;
        f.write_str(trim_fraction(&format!("{value:.decimals$}")))
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// A field type the registry can render.
///
/// Implemented for exactly the three recognized kinds: `i32`, `f32` and
/// `String`. Fields of any other type are registered with
/// [`PropertyRegistry::add_opaque`](crate::registry::PropertyRegistry::add_opaque).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a renderable property type",
    label = "only `i32`, `f32` and `String` are rendered",
    note = "mark the field `#[property(opaque)]` to list it without a value"
)]
pub trait PropertyType: 'static {
    /// The tag recorded for fields of this type.
    const TYPE_TAG: TypeTag;

    /// Reads the current value.
    fn property_value(&self) -> PropertyValue<'_>;
}

impl PropertyType for i32 {
    const TYPE_TAG: TypeTag = TypeTag::new(PropertyKind::Integer, "i32");

    fn property_value(&self) -> PropertyValue<'_> {
        PropertyValue::Integer(*self)
    }
}

impl PropertyType for f32 {
    const TYPE_TAG: TypeTag = TypeTag::new(PropertyKind::Float, "f32");

    fn property_value(&self) -> PropertyValue<'_> {
        PropertyValue::Float(*self)
    }
}

impl PropertyType for String {
    const TYPE_TAG: TypeTag = TypeTag::new(PropertyKind::Text, "String");

    fn property_value(&self) -> PropertyValue<'_> {
        PropertyValue::Text(self)
    }
}
