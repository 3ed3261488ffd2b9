use crate::adapter::AdapterError;
use crate::info::FieldInfo;
use crate::FieldMut;
use crate::ops::{List, Optional};

// -----------------------------------------------------------------------------
// Containers

/// Convert `items` into a staging list and commit it to `list` once every
/// item converted. On error `list` is left as it was.
pub(crate) fn fill_list<I>(
    info: &'static FieldInfo,
    list: &mut dyn List,
    items: I,
    mut convert: impl FnMut(FieldMut<'_>, I::Item) -> Result<(), AdapterError>,
) -> Result<(), AdapterError>
where
    I: IntoIterator,
{
    let capacity = list.is_fixed_size().then(|| list.len());
    let mut staged = list.staging();
    for item in items {
        if let Some(capacity) = capacity.filter(|&capacity| staged.len() >= capacity) {
            return Err(AdapterError::ListFull {
                field: info.name(),
                capacity,
            });
        }
        if let Some(slot) = staged.push_default() {
            convert(slot, item)?;
        }
    }
    list.commit(staged);
    Ok(())
}

/// Convert into the value of `opt`, inserting a default first when it is
/// `None`.
///
/// `convert` returns whether the document held a value. An option that was
/// `None` stays `None` unless `convert` succeeds and reports one.
pub(crate) fn fill_option(
    opt: &mut dyn Optional,
    convert: impl FnOnce(FieldMut<'_>) -> Result<bool, AdapterError>,
) -> Result<(), AdapterError> {
    let was_some = opt.is_some();
    let result = convert(opt.get_or_insert_default());
    if !was_some && !matches!(result, Ok(true)) {
        opt.clear();
    }
    result.map(|_| ())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{fill_list, fill_option};
    use crate::adapter::AdapterError;
    use crate::info::FieldInfo;
    use crate::{Field, FieldMut};

    const INFO: FieldInfo = FieldInfo::new("ids", "ids");

    fn set_u8(slot: FieldMut<'_>, item: u8) -> Result<(), AdapterError> {
        match slot {
            FieldMut::U8(v) if item < 100 => {
                *v = item;
                Ok(())
            }
            other => Err(AdapterError::TypeMismatch {
                field: "ids",
                expected: other.kind(),
                found: "number",
            }),
        }
    }

    #[test]
    fn list_is_replaced_only_on_success() {
        let mut ids: Vec<u8> = vec![1, 2];
        let FieldMut::List(list) = ids.as_field_mut() else {
            panic!("expected a list");
        };
        assert!(fill_list(&INFO, list, [3, 200], set_u8).is_err());
        fill_list(&INFO, list, [3, 4, 5], set_u8).unwrap();
        assert_eq!(ids, [3, 4, 5]);
    }

    #[test]
    fn fixed_list_capacity() {
        let mut ids = [9_u8; 2];
        let FieldMut::List(list) = ids.as_field_mut() else {
            panic!("expected a list");
        };
        let err = fill_list(&INFO, list, [1, 2, 3], set_u8).unwrap_err();
        assert!(matches!(err, AdapterError::ListFull { capacity: 2, .. }));
        fill_list(&INFO, list, [1], set_u8).unwrap();
        assert_eq!(ids, [1, 9]);
    }

    #[test]
    fn option_keeps_state() {
        let mut opt: Option<u8> = None;
        let FieldMut::Option(inner) = opt.as_field_mut() else {
            panic!("expected an option");
        };
        assert!(fill_option(inner, |slot| set_u8(slot, 200).map(|()| true)).is_err());
        assert!(!inner.is_some());
        fill_option(inner, |_| Ok(false)).unwrap();
        assert!(!inner.is_some());
        fill_option(inner, |slot| set_u8(slot, 7).map(|()| true)).unwrap();
        assert_eq!(opt, Some(7));

        let FieldMut::Option(inner) = opt.as_field_mut() else {
            panic!("expected an option");
        };
        assert!(fill_option(inner, |slot| set_u8(slot, 200).map(|()| true)).is_err());
        assert_eq!(opt, Some(7));
    }
}
