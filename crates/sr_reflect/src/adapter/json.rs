use alloc::string::ToString;
use alloc::vec::Vec;

use serde_json::{Map, Number, Value};

use crate::adapter::{AdapterConfig, AdapterError, scalar, staging};
use crate::info::{FieldInfo, Transform};
use crate::visit::FieldVisitorMut;
use crate::visit::traverse::check;
use crate::{FieldKind, FieldMut, FieldRef, Fingerprint, Reflect, Struct};

// -----------------------------------------------------------------------------
// Reading

/// Populate `target` from a JSON object.
///
/// Each key of the object is fingerprinted and routed to the matching field
/// with [`find_field_mut`](Struct::find_field_mut). Nested objects populate
/// nested structs, arrays populate lists and `null` clears an `Option`.
/// Fields absent from the object keep their value, as do list and option
/// fields whose value fails to convert.
///
/// # Examples
///
/// ```
/// use sr_reflect::{adapter::{AdapterConfig, json_to_struct}, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Spawn {
///     #[reflect(name = "monsterId")]
///     monster_id: u32,
///     count: u8,
///     tags: Vec<String>,
/// }
///
/// let json = serde_json::json!({ "monsterId": 1001, "tags": ["boss"], "extra": 1 });
/// let mut spawn = Spawn::default();
/// json_to_struct(&json, &mut spawn, &AdapterConfig::new()).unwrap();
///
/// assert_eq!(spawn.monster_id, 1001);
/// assert_eq!(spawn.count, 0);
/// assert_eq!(spawn.tags, ["boss"]);
/// ```
pub fn json_to_struct<T: Reflect>(
    json: &Value,
    target: &mut T,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    const { check::<T>() }
    json_to_dyn(json, target, config)
}

/// [`json_to_struct`] for a type known only at run time.
pub fn json_to_dyn(
    json: &Value,
    target: &mut dyn Struct,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    let Value::Object(object) = json else {
        return Err(AdapterError::TypeMismatch {
            field: target.type_name(),
            expected: FieldKind::Struct,
            found: json_kind(json),
        });
    };

    for (key, value) in object {
        let mut visitor = JsonVisitor {
            key,
            value,
            config,
            matched: false,
            error: None,
        };
        target.find_field_mut(Fingerprint::of(key), &mut visitor);
        if let Some(err) = visitor.error {
            return Err(err);
        }
        if !visitor.matched {
            config.unknown_key(target.type_name(), key)?;
        }
    }
    Ok(())
}

/// Parse `text` and build a `T` from it, starting from `T::default()`.
pub fn from_json_str<T: Reflect + Default>(
    text: &str,
    config: &AdapterConfig,
) -> Result<T, AdapterError> {
    let json: Value = serde_json::from_str(text)?;
    let mut target = T::default();
    json_to_struct(&json, &mut target, config)?;
    Ok(target)
}

struct JsonVisitor<'a> {
    key: &'a str,
    value: &'a Value,
    config: &'a AdapterConfig,
    matched: bool,
    error: Option<AdapterError>,
}

impl FieldVisitorMut for JsonVisitor<'_> {
    fn visit(&mut self, info: &'static FieldInfo, field: FieldMut<'_>) -> bool {
        // Guard against two names sharing a fingerprint.
        if info.name() != self.key {
            return false;
        }
        self.matched = true;
        // A bind group stops at its first aborting member.
        if self.error.is_some() {
            return true;
        }
        crate::cfg::debug! {
            log::trace!("json `{}` -> {:?}", self.key, field.kind());
        }
        let result = json_to_field(info, field, self.value, self.config);
        self.config.settle(result, &mut self.error)
    }

    fn visit_transformed(
        &mut self,
        info: &'static FieldInfo,
        mut field: FieldMut<'_>,
        transform: &'static Transform,
    ) -> bool {
        let handled = self.visit(info, field.reborrow());
        if handled && self.error.is_none() {
            transform.apply(info, field);
        }
        handled
    }
}

fn json_to_field(
    info: &'static FieldInfo,
    field: FieldMut<'_>,
    value: &Value,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    match (field, value) {
        (FieldMut::Option(opt), Value::Null) => {
            opt.clear();
            Ok(())
        }
        (FieldMut::Option(opt), value) => staging::fill_option(opt, |inner| {
            json_to_field(info, inner, value, config).map(|()| true)
        }),
        (FieldMut::Struct(inner), Value::Object(_)) => json_to_dyn(value, inner, config),
        (FieldMut::List(list), Value::Array(items)) => {
            staging::fill_list(info, list, items, |slot, item| {
                json_to_field(info, slot, item, config)
            })
        }
        (FieldMut::Bool(v), Value::Bool(b)) => {
            *v = *b;
            Ok(())
        }
        (field, Value::Number(number)) => assign_number(info, field, number),
        (field, Value::String(text)) => scalar::assign_str(info, field, text),
        (field, value) => Err(AdapterError::TypeMismatch {
            field: info.name(),
            expected: field.kind(),
            found: json_kind(value),
        }),
    }
}

fn assign_number(
    info: &'static FieldInfo,
    field: FieldMut<'_>,
    number: &Number,
) -> Result<(), AdapterError> {
    let kind = field.kind();
    let out_of_range = || AdapterError::OutOfRange {
        field: info.name(),
        expected: kind,
        value: number.to_string(),
    };

    macro_rules! int {
        ($v:ident) => {{
            let value = if let Some(i) = number.as_i64() {
                i.try_into().ok()
            } else if let Some(u) = number.as_u64() {
                u.try_into().ok()
            } else {
                return Err(AdapterError::InvalidValue {
                    field: info.name(),
                    expected: kind,
                    value: number.to_string(),
                });
            };
            *$v = value.ok_or_else(out_of_range)?;
        }};
    }

    match field {
        FieldMut::I8(v) => int!(v),
        FieldMut::I16(v) => int!(v),
        FieldMut::I32(v) => int!(v),
        FieldMut::I64(v) => int!(v),
        FieldMut::I128(v) => int!(v),
        FieldMut::Isize(v) => int!(v),
        FieldMut::U8(v) => int!(v),
        FieldMut::U16(v) => int!(v),
        FieldMut::U32(v) => int!(v),
        FieldMut::U64(v) => int!(v),
        FieldMut::U128(v) => int!(v),
        FieldMut::Usize(v) => int!(v),
        FieldMut::F32(v) => {
            let wide = number.as_f64().ok_or_else(out_of_range)?;
            *v = scalar::narrow_f32(wide).ok_or_else(out_of_range)?;
        }
        FieldMut::F64(v) => *v = number.as_f64().ok_or_else(out_of_range)?,
        _ => {
            return Err(AdapterError::TypeMismatch {
                field: info.name(),
                expected: kind,
                found: "number",
            });
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// -----------------------------------------------------------------------------
// Writing

/// Write every field of `source` into a JSON object, in declaration order.
///
/// When several fields share an external name, the first one is written.
///
/// # Examples
///
/// ```
/// use sr_reflect::{adapter::struct_to_json, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Loot { item: String, chance: f32, limit: Option<u8> }
///
/// let loot = Loot { item: "gem".into(), chance: 0.5, limit: None };
/// let json = struct_to_json(&loot);
/// assert_eq!(json.to_string(), r#"{"item":"gem","chance":0.5,"limit":null}"#);
/// ```
pub fn struct_to_json<T: Reflect>(source: &T) -> Value {
    const { check::<T>() }
    dyn_to_json(source)
}

/// [`struct_to_json`] for a type known only at run time.
pub fn dyn_to_json(source: &dyn Struct) -> Value {
    let mut object = Map::new();
    source.visit_fields(&mut |info: &'static FieldInfo, field: FieldRef<'_>| {
        if !object.contains_key(info.name()) {
            object.insert(info.name().to_string(), field_to_json(field));
        }
        true
    });
    Value::Object(object)
}

fn field_to_json(field: FieldRef<'_>) -> Value {
    match field {
        FieldRef::Bool(v) => Value::Bool(*v),
        FieldRef::Char(v) => Value::String(v.to_string()),
        FieldRef::I8(v) => Value::from(*v),
        FieldRef::I16(v) => Value::from(*v),
        FieldRef::I32(v) => Value::from(*v),
        FieldRef::I64(v) => Value::from(*v),
        FieldRef::I128(v) => match i64::try_from(*v) {
            Ok(i) => Value::from(i),
            Err(_) => Value::String(v.to_string()),
        },
        FieldRef::Isize(v) => Value::from(*v),
        FieldRef::U8(v) => Value::from(*v),
        FieldRef::U16(v) => Value::from(*v),
        FieldRef::U32(v) => Value::from(*v),
        FieldRef::U64(v) => Value::from(*v),
        FieldRef::U128(v) => match u64::try_from(*v) {
            Ok(u) => Value::from(u),
            Err(_) => Value::String(v.to_string()),
        },
        FieldRef::Usize(v) => Value::from(*v),
        FieldRef::F32(v) => Value::from(*v),
        FieldRef::F64(v) => Value::from(*v),
        FieldRef::String(v) => Value::String(v.clone()),
        FieldRef::Struct(v) => dyn_to_json(v),
        FieldRef::List(v) => Value::Array(v.iter().map(field_to_json).collect::<Vec<_>>()),
        FieldRef::Option(v) => v.get().map_or(Value::Null, field_to_json),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::{dyn_to_json, from_json_str, json_to_struct, struct_to_json};
    use crate::adapter::{AdapterConfig, AdapterError, MismatchPolicy};
    use crate::derive::Reflect;
    use crate::info::{FieldInfo, Tag};
    use crate::{FieldMut, Reflect, Struct};

    struct ElfHash;

    fn at_least_one(_: &FieldInfo, field: FieldMut<'_>) {
        if let FieldMut::I32(v) = field {
            *v = (*v).max(1);
        }
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct FlowOut {
        #[reflect(name = "outCnt")]
        out_cnt: i32,
        #[reflect(name = "outId")]
        out_id: [i32; 3],
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct CastFlow {
        #[reflect(name = "breakTime", tag = ElfHash)]
        wait_time_qian_yao: i32,
        #[reflect(name = "castTime", tag = ElfHash)]
        wait_time_cast: i32,
        #[reflect(name = "endTime", transform = at_least_one)]
        wait_time_finish: i32,
        #[reflect(name = "onStart")]
        on_start: FlowOut,
        note: Option<String>,
        scale: f64,
    }

    #[test]
    fn nested_population() {
        let json = json!({
            "castTime": 450,
            "endTime": 0,
            "onStart": { "outCnt": 2, "outId": [7, 8] },
            "note": "fast",
            "scale": 1.25,
        });
        let mut flow = CastFlow::default();
        json_to_struct(&json, &mut flow, &AdapterConfig::new()).unwrap();

        assert_eq!(flow.wait_time_qian_yao, 0);
        assert_eq!(flow.wait_time_cast, 450);
        assert_eq!(flow.wait_time_finish, 1);
        assert_eq!(flow.on_start, FlowOut { out_cnt: 2, out_id: [7, 8, 0] });
        assert_eq!(flow.note.as_deref(), Some("fast"));
        assert_eq!(flow.scale, 1.25);

        json_to_struct(&json!({ "note": null }), &mut flow, &AdapterConfig::new()).unwrap();
        assert_eq!(flow.note, None);
    }

    #[test]
    fn tag_is_visible_to_custom_visitors() {
        let info = CastFlow::REGISTRY.field("breakTime").unwrap();
        assert_eq!(info.tag(), Some(&Tag::of::<ElfHash>()));
    }

    #[test]
    fn mismatch_policy() {
        let json = json!({ "castTime": "soon", "breakTime": 5 });

        let mut flow = CastFlow::default();
        json_to_struct(&json, &mut flow, &AdapterConfig::new()).unwrap();
        assert_eq!((flow.wait_time_cast, flow.wait_time_qian_yao), (0, 5));

        let abort = AdapterConfig::new().with_mismatch_policy(MismatchPolicy::Abort);
        let err = json_to_struct(&json, &mut CastFlow::default(), &abort).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidValue { field: "castTime", .. }));

        let err = json_to_struct(&json!({ "scale": true }), &mut flow, &abort).unwrap_err();
        assert!(matches!(err, AdapterError::TypeMismatch { found: "boolean", .. }));
    }

    #[test]
    fn ranges_and_unknown_keys() {
        let strict = AdapterConfig::strict();
        let json = json!({ "onStart": { "outId": [1, 2, 3, 4] } });
        let err = json_to_struct(&json, &mut CastFlow::default(), &strict).unwrap_err();
        assert!(matches!(err, AdapterError::ListFull { field: "outId", capacity: 3 }));

        let json = json!({ "castTime": 1_u64 << 40 });
        let err = json_to_struct(&json, &mut CastFlow::default(), &strict).unwrap_err();
        assert!(matches!(err, AdapterError::OutOfRange { .. }));

        let json = json!({ "speed": 3 });
        let err = json_to_struct(&json, &mut CastFlow::default(), &strict).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownField { type_name: "CastFlow", .. }));
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Loot {
        chance: Option<u8>,
        items: Vec<i32>,
        weight: f32,
    }

    #[test]
    fn rejected_values_leave_fields_alone() {
        let mut loot = Loot {
            chance: None,
            items: [1, 2].into(),
            weight: 0.5,
        };
        let json = json!({ "chance": 300, "items": [3, "x"], "weight": 1e300 });
        json_to_struct(&json, &mut loot, &AdapterConfig::new()).unwrap();
        assert_eq!(loot, Loot { chance: None, items: [1, 2].into(), weight: 0.5 });

        loot.chance = Some(4);
        json_to_struct(&json, &mut loot, &AdapterConfig::new()).unwrap();
        assert_eq!(loot.chance, Some(4));

        let abort = AdapterConfig::new().with_mismatch_policy(MismatchPolicy::Abort);
        let err = json_to_struct(&json!({ "weight": 1e300 }), &mut loot, &abort).unwrap_err();
        assert!(matches!(err, AdapterError::OutOfRange { field: "weight", .. }));

        let json = json!({ "chance": 9, "items": [3, 4], "weight": -2.5 });
        json_to_struct(&json, &mut loot, &abort).unwrap();
        assert_eq!(loot, Loot { chance: Some(9), items: [3, 4].into(), weight: -2.5 });
    }

    #[test]
    fn from_str_and_back() {
        let text = r#"{ "breakTime": 3, "onStart": { "outCnt": 1, "outId": [4] } }"#;
        let flow: CastFlow = from_json_str(text, &AdapterConfig::new()).unwrap();
        assert_eq!(flow.on_start.out_id, [4, 0, 0]);

        let json = struct_to_json(&flow);
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["breakTime", "castTime", "endTime", "onStart", "note", "scale"]);
        assert_eq!(json["onStart"], json!({ "outCnt": 1, "outId": [4, 0, 0] }));
        assert_eq!(json["note"], json!(null));

        let dynamic: &dyn Struct = &flow;
        assert_eq!(dyn_to_json(dynamic), json);

        assert!(matches!(
            from_json_str::<CastFlow>("{", &AdapterConfig::new()),
            Err(AdapterError::Json(_))
        ));
    }
}
