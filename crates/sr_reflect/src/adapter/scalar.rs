use alloc::string::ToString;
use core::num::IntErrorKind;
use core::str::FromStr;

use crate::adapter::AdapterError;
use crate::info::FieldInfo;
use crate::{FieldKind, FieldMut};

// -----------------------------------------------------------------------------
// Parsing

fn invalid(info: &FieldInfo, expected: FieldKind, text: &str) -> AdapterError {
    AdapterError::InvalidValue {
        field: info.name(),
        expected,
        value: text.to_string(),
    }
}

fn parse_int<T>(info: &FieldInfo, expected: FieldKind, text: &str) -> Result<T, AdapterError>
where
    T: FromStr<Err = core::num::ParseIntError>,
{
    text.trim().parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AdapterError::OutOfRange {
            field: info.name(),
            expected,
            value: text.to_string(),
        },
        _ => invalid(info, expected, text),
    })
}

fn parse_float<T: FromStr>(
    info: &FieldInfo,
    expected: FieldKind,
    text: &str,
) -> Result<T, AdapterError> {
    text.trim()
        .parse::<T>()
        .map_err(|_| invalid(info, expected, text))
}

/// Narrow to `f32`, rejecting finite values beyond its range.
pub(crate) fn narrow_f32(wide: f64) -> Option<f32> {
    let narrow = wide as f32;
    (narrow.is_finite() || !wide.is_finite()).then_some(narrow)
}

/// Accepts `true`/`false` in any case, and `1`/`0`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

// -----------------------------------------------------------------------------
// Assign

/// Parse `text` into a scalar field.
///
/// An `Option` field is set to `Some` of the parsed value. When the text does
/// not parse, an option that was `None` stays `None` and one that held a
/// value keeps it. Struct and list fields are a mismatch.
pub(crate) fn assign_str(
    info: &FieldInfo,
    field: FieldMut<'_>,
    text: &str,
) -> Result<(), AdapterError> {
    macro_rules! int {
        ($v:ident, $kind:ident) => {
            *$v = parse_int(info, FieldKind::$kind, text)?
        };
    }

    match field {
        FieldMut::Bool(v) => {
            *v = parse_bool(text).ok_or_else(|| invalid(info, FieldKind::Bool, text))?;
        }
        FieldMut::Char(v) => {
            let mut chars = text.chars();
            *v = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(invalid(info, FieldKind::Char, text)),
            };
        }
        FieldMut::I8(v) => int!(v, I8),
        FieldMut::I16(v) => int!(v, I16),
        FieldMut::I32(v) => int!(v, I32),
        FieldMut::I64(v) => int!(v, I64),
        FieldMut::I128(v) => int!(v, I128),
        FieldMut::Isize(v) => int!(v, Isize),
        FieldMut::U8(v) => int!(v, U8),
        FieldMut::U16(v) => int!(v, U16),
        FieldMut::U32(v) => int!(v, U32),
        FieldMut::U64(v) => int!(v, U64),
        FieldMut::U128(v) => int!(v, U128),
        FieldMut::Usize(v) => int!(v, Usize),
        FieldMut::F32(v) => {
            let wide = parse_float::<f64>(info, FieldKind::F32, text)?;
            *v = narrow_f32(wide).ok_or_else(|| AdapterError::OutOfRange {
                field: info.name(),
                expected: FieldKind::F32,
                value: text.to_string(),
            })?;
        }
        FieldMut::F64(v) => *v = parse_float(info, FieldKind::F64, text)?,
        FieldMut::String(v) => {
            v.clear();
            v.push_str(text);
        }
        FieldMut::Option(opt) => {
            let was_some = opt.is_some();
            let result = assign_str(info, opt.get_or_insert_default(), text);
            if result.is_err() && !was_some {
                opt.clear();
            }
            return result;
        }
        other @ (FieldMut::Struct(_) | FieldMut::List(_)) => {
            return Err(AdapterError::TypeMismatch {
                field: info.name(),
                expected: other.kind(),
                found: "text",
            });
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{assign_str, parse_bool};
    use crate::adapter::AdapterError;
    use crate::info::FieldInfo;
    use crate::{Field, FieldKind};

    const INFO: FieldInfo = FieldInfo::new("value", "value");

    #[test]
    fn integers() {
        let mut v = 0_i16;
        assign_str(&INFO, v.as_field_mut(), " -42 ").unwrap();
        assert_eq!(v, -42);

        let err = assign_str(&INFO, v.as_field_mut(), "40000").unwrap_err();
        assert!(matches!(err, AdapterError::OutOfRange { expected: FieldKind::I16, .. }));

        let err = assign_str(&INFO, v.as_field_mut(), "4x").unwrap_err();
        assert!(matches!(err, AdapterError::InvalidValue { .. }));
        assert_eq!(v, -42);
    }

    #[test]
    fn bool_and_char() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);

        let mut c = 'a';
        assign_str(&INFO, c.as_field_mut(), "z").unwrap();
        assert_eq!(c, 'z');
        assert!(assign_str(&INFO, c.as_field_mut(), "zz").is_err());
    }

    #[test]
    fn option_and_string() {
        let mut opt: Option<f64> = None;
        assign_str(&INFO, opt.as_field_mut(), "2.5").unwrap();
        assert_eq!(opt, Some(2.5));
        assert!(assign_str(&INFO, opt.as_field_mut(), "nan?").is_err());
        assert_eq!(opt, Some(2.5));

        let mut empty: Option<u8> = None;
        assert!(assign_str(&INFO, empty.as_field_mut(), "300").is_err());
        assert_eq!(empty, None);

        let mut text = String::from("old");
        assign_str(&INFO, text.as_field_mut(), "new").unwrap();
        assert_eq!(text, "new");
    }

    #[test]
    fn f32_range() {
        let mut v = 1.0_f32;
        assign_str(&INFO, v.as_field_mut(), "-0.25").unwrap();
        assert_eq!(v, -0.25);

        let err = assign_str(&INFO, v.as_field_mut(), "1e300").unwrap_err();
        assert!(matches!(err, AdapterError::OutOfRange { expected: FieldKind::F32, .. }));
        assert_eq!(v, -0.25);

        assign_str(&INFO, v.as_field_mut(), "inf").unwrap();
        assert!(v.is_infinite());
    }

    #[test]
    fn containers_mismatch() {
        let mut list = alloc::vec![1_u8];
        let err = assign_str(&INFO, list.as_field_mut(), "1").unwrap_err();
        assert!(matches!(err, AdapterError::TypeMismatch { expected: FieldKind::List, .. }));
    }
}
