use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use roxmltree::{Document, Node};

use crate::adapter::{AdapterConfig, AdapterError, MismatchPolicy, scalar, staging};
use crate::catalog::TypeCatalog;
use crate::info::{FieldInfo, Transform};
use crate::visit::FieldVisitorMut;
use crate::visit::traverse::check;
use crate::{FieldKind, FieldMut, Fingerprint, Reflect, Struct};

// -----------------------------------------------------------------------------
// Element to struct

/// Populate `target` from the child elements of `element`.
///
/// Every child element with a name attribute (`name` by default) is one
/// field. A scalar field takes the value attribute (`val` by default) and is
/// left untouched when it is missing. A struct field recurses into the child
/// element, and a list field takes one grandchild element per item. An
/// option field is set only when the element carries a value for it. Child
/// elements without a name attribute are ignored.
///
/// A list or option field whose value fails to convert keeps its previous
/// content.
///
/// # Examples
///
/// ```
/// use sr_reflect::{adapter::{AdapterConfig, xml_to_struct}, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Door {
///     #[reflect(name = "keyId")]
///     key_id: u32,
///     locked: bool,
/// }
///
/// let text = r#"<Door>
///     <var name="keyId" val="12"/>
///     <var name="locked" val="true"/>
///     <var name="color" val="red"/>
/// </Door>"#;
///
/// let doc = roxmltree::Document::parse(text).unwrap();
/// let mut door = Door::default();
/// xml_to_struct(doc.root_element(), &mut door, &AdapterConfig::new()).unwrap();
///
/// assert_eq!(door.key_id, 12);
/// assert!(door.locked);
/// ```
pub fn xml_to_struct<T: Reflect>(
    element: Node<'_, '_>,
    target: &mut T,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    const { check::<T>() }
    xml_to_dyn(element, target, config)
}

/// [`xml_to_struct`] for a type known only at run time.
pub fn xml_to_dyn(
    element: Node<'_, '_>,
    target: &mut dyn Struct,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    for child in element.children().filter(Node::is_element) {
        let Some(key) = child.attribute(config.name_attribute) else {
            continue;
        };
        let mut visitor = XmlVisitor {
            key,
            element: child,
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

/// Parse `text` and build a `T` from its root element, starting from
/// `T::default()`.
pub fn from_xml_str<T: Reflect + Default>(
    text: &str,
    config: &AdapterConfig,
) -> Result<T, AdapterError> {
    let doc = Document::parse(text)?;
    let mut target = T::default();
    xml_to_struct(doc.root_element(), &mut target, config)?;
    Ok(target)
}

struct XmlVisitor<'a, 'input> {
    key: &'a str,
    element: Node<'a, 'input>,
    config: &'a AdapterConfig,
    matched: bool,
    error: Option<AdapterError>,
}

impl FieldVisitorMut for XmlVisitor<'_, '_> {
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
            log::trace!("xml `{}` -> {:?}", self.key, field.kind());
        }
        let result = xml_to_field(info, field, self.element, self.config);
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

fn has_child_elements(element: Node<'_, '_>) -> bool {
    element.children().any(|child| child.is_element())
}

fn xml_to_field(
    info: &'static FieldInfo,
    field: FieldMut<'_>,
    element: Node<'_, '_>,
    config: &AdapterConfig,
) -> Result<(), AdapterError> {
    match field {
        FieldMut::Struct(inner) => xml_to_dyn(element, inner, config),
        FieldMut::List(list) => {
            let items = element.children().filter(Node::is_element);
            staging::fill_list(info, list, items, |slot, item| {
                xml_to_field(info, slot, item, config)
            })
        }
        FieldMut::Option(opt) => staging::fill_option(opt, |inner| {
            let has_value = element.attribute(config.value_attribute).is_some();
            let present = match inner.kind() {
                FieldKind::Struct | FieldKind::List => has_child_elements(element),
                FieldKind::Option => has_value || has_child_elements(element),
                _ => has_value,
            };
            if present {
                xml_to_field(info, inner, element, config)?;
            }
            Ok(present)
        }),
        other => match element.attribute(config.value_attribute) {
            Some(text) => scalar::assign_str(info, other, text),
            None => Ok(()),
        },
    }
}

// -----------------------------------------------------------------------------
// Documents of nodes

/// Load every node of a `<Root><Nodes>...</Nodes></Root>` document.
///
/// The tag name of each element under `Nodes` selects the type to create
/// from `catalog`, then the element populates the new instance with
/// [`xml_to_dyn`]. An element naming an unknown type is skipped, or is an
/// error when the mismatch policy is [`Abort`](MismatchPolicy::Abort).
///
/// # Examples
///
/// ```
/// use sr_reflect::{adapter::{AdapterConfig, load_nodes}, catalog::TypeCatalog, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Wait { seconds: f32 }
///
/// let mut catalog = TypeCatalog::new();
/// catalog.register::<Wait>();
///
/// let text = r#"<Root><Nodes>
///     <Wait><var name="seconds" val="1.5"/></Wait>
///     <Teleport/>
/// </Nodes></Root>"#;
///
/// let nodes = load_nodes(text, &catalog, &AdapterConfig::new()).unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].downcast_ref::<Wait>().unwrap().seconds, 1.5);
/// ```
pub fn load_nodes(
    text: &str,
    catalog: &TypeCatalog,
    config: &AdapterConfig,
) -> Result<Vec<Box<dyn Struct>>, AdapterError> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !root.has_tag_name("Root") {
        return Err(AdapterError::MissingElement("Root"));
    }
    let nodes = root
        .children()
        .find(|child| child.has_tag_name("Nodes"))
        .ok_or(AdapterError::MissingElement("Nodes"))?;

    let mut out = Vec::new();
    for element in nodes.children().filter(Node::is_element) {
        let name = element.tag_name().name();
        let Some(mut instance) = catalog.create(name) else {
            if config.on_mismatch == MismatchPolicy::Abort {
                return Err(AdapterError::UnknownType {
                    name: name.to_string(),
                });
            }
            log::warn!("`{name}` is not a registered type, node skipped");
            continue;
        };
        xml_to_dyn(element, &mut *instance, config)?;
        out.push(instance);
    }
    log::debug!("loaded {} nodes", out.len());
    Ok(out)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use roxmltree::Document;

    use super::{from_xml_str, load_nodes, xml_to_struct};
    use crate::adapter::{AdapterConfig, AdapterError, MismatchPolicy};
    use crate::catalog::TypeCatalog;
    use crate::derive::Reflect;
    use crate::info::FieldInfo;
    use crate::FieldMut;

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
        out_id: Vec<i32>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(name = "ActionFlowLCast")]
    struct CastFlow {
        #[reflect(bind = "breakTime", tag = ElfHash)]
        wait_time_qian_yao: i32,
        #[reflect(name = "castTime", tag = ElfHash)]
        wait_time_cast: i32,
        #[reflect(name = "endTime", transform = at_least_one)]
        wait_time_finish: i32,
        #[reflect(bind = "breakTime")]
        wait_time_move_qian_yao: i32,
        #[reflect(name = "onStart")]
        on_start: FlowOut,
        label: Option<String>,
    }

    const FLOW: &str = r#"<ActionFlowLCast>
        <var name="castTime" val="450"/>
        <var name="endTime" val="0"/>
        <var name="onStart">
            <var name="outCnt" val="2"/>
            <var name="outId">
                <item val="5"/>
                <item val="6"/>
            </var>
        </var>
        <var name="label"/>
        <var val="orphan"/>
    </ActionFlowLCast>"#;

    #[test]
    fn populate_nested() {
        let flow: CastFlow = from_xml_str(FLOW, &AdapterConfig::new()).unwrap();
        assert_eq!(flow.wait_time_cast, 450);
        assert_eq!(flow.wait_time_finish, 1);
        assert_eq!(flow.wait_time_qian_yao, 0);
        assert_eq!(flow.on_start, FlowOut { out_cnt: 2, out_id: [5, 6].into() });
        assert_eq!(flow.label, None);
    }

    #[test]
    fn bind_group_fills_every_member() {
        let text = r#"<N><var name="breakTime" val="30"/></N>"#;
        let flow: CastFlow = from_xml_str(text, &AdapterConfig::strict()).unwrap();
        assert_eq!(flow.wait_time_qian_yao, 30);
        assert_eq!(flow.wait_time_move_qian_yao, 30);
        assert_eq!(flow.wait_time_cast, 0);
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Patrol {
        radius: Option<i32>,
        waypoints: Vec<u8>,
        leader: Option<FlowOut>,
    }

    #[test]
    fn rejected_values_leave_fields_alone() {
        let text = r#"<Patrol>
            <var name="radius"><x/></var>
            <var name="waypoints"><item val="1"/><item val="x"/></var>
            <var name="leader"/>
        </Patrol>"#;
        let doc = Document::parse(text).unwrap();
        let mut patrol = Patrol { waypoints: [4, 5].into(), ..Patrol::default() };
        xml_to_struct(doc.root_element(), &mut patrol, &AdapterConfig::new()).unwrap();
        assert_eq!(patrol, Patrol { waypoints: [4, 5].into(), ..Patrol::default() });

        let text = r#"<Patrol>
            <var name="radius" val="8"/>
            <var name="leader"><var name="outCnt" val="3"/></var>
        </Patrol>"#;
        let patrol: Patrol = from_xml_str(text, &AdapterConfig::new()).unwrap();
        assert_eq!(patrol.radius, Some(8));
        assert_eq!(patrol.leader.map(|out| out.out_cnt), Some(3));
    }

    #[test]
    fn missing_value_keeps_field() {
        let doc = Document::parse(r#"<N><var name="castTime"/></N>"#).unwrap();
        let mut flow = CastFlow { wait_time_cast: 9, ..CastFlow::default() };
        xml_to_struct(doc.root_element(), &mut flow, &AdapterConfig::new()).unwrap();
        assert_eq!(flow.wait_time_cast, 9);
    }

    #[test]
    fn custom_attributes_and_errors() {
        let config = AdapterConfig::strict()
            .with_name_attribute("key")
            .with_value_attribute("value");
        let text = r#"<N><f key="castTime" value="7"/></N>"#;
        let flow: CastFlow = from_xml_str(text, &config).unwrap();
        assert_eq!(flow.wait_time_cast, 7);

        let text = r#"<N><f key="castTime" value="x"/></N>"#;
        let err = from_xml_str::<CastFlow>(text, &config).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidValue { field: "castTime", .. }));

        let err = from_xml_str::<CastFlow>("<N>", &config).unwrap_err();
        assert!(matches!(err, AdapterError::Xml(_)));
    }

    #[test]
    fn nodes_by_type_name() {
        let mut catalog = TypeCatalog::new();
        catalog.register::<CastFlow>();

        let text = alloc::format!("<Root><Nodes>{FLOW}<Unknown/>{FLOW}</Nodes></Root>");
        let nodes = load_nodes(&text, &catalog, &AdapterConfig::new()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].downcast_ref::<CastFlow>().map(|f| f.wait_time_cast), Some(450));

        let abort = AdapterConfig::new().with_mismatch_policy(MismatchPolicy::Abort);
        let err = load_nodes(&text, &catalog, &abort).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownType { .. }));

        let err = load_nodes("<Root/>", &catalog, &abort).unwrap_err();
        assert!(matches!(err, AdapterError::MissingElement("Nodes")));
    }
}
