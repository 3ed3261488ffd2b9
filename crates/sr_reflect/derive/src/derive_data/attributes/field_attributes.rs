use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, Token, Type, parse::ParseStream};

use super::{kw, parse_reflect_attrs};

/// The optional annotation of a field.
#[derive(Default, Debug)]
pub(crate) enum FieldAnnotation {
    #[default]
    None,
    /// `tag = MarkerType`
    Tag(Type),
    /// `transform = path::to::func`
    Transform(Path),
}

/// Attributes placed on a single field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(name = "...")]`
    pub name: Option<LitStr>,
    /// `#[reflect(bind = "...")]`
    pub bind: Option<LitStr>,
    pub annotation: FieldAnnotation,
    /// `#[reflect(ignore)]`
    pub ignore: Option<Span>,
    annotation_span: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_reflect_attrs(attrs, |input| this.parse_one(input))?;
        this.validity()?;
        Ok(this)
    }

    fn parse_one(&mut self, input: ParseStream) -> syn::Result<()> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::name) {
            let keyword = input.parse::<kw::name>()?;
            input.parse::<Token![=]>()?;
            let name: LitStr = input.parse()?;
            if self.name.is_some() {
                return Err(syn::Error::new(keyword.span, "duplicate `name` attribute"));
            }
            self.name = Some(name);
        } else if lookahead.peek(kw::bind) {
            let keyword = input.parse::<kw::bind>()?;
            input.parse::<Token![=]>()?;
            let group: LitStr = input.parse()?;
            if self.bind.is_some() {
                return Err(syn::Error::new(keyword.span, "duplicate `bind` attribute"));
            }
            self.bind = Some(group);
        } else if lookahead.peek(kw::tag) {
            let keyword = input.parse::<kw::tag>()?;
            input.parse::<Token![=]>()?;
            self.set_annotation(keyword.span, FieldAnnotation::Tag(input.parse()?))?;
        } else if lookahead.peek(kw::transform) {
            let keyword = input.parse::<kw::transform>()?;
            input.parse::<Token![=]>()?;
            self.set_annotation(keyword.span, FieldAnnotation::Transform(input.parse()?))?;
        } else if lookahead.peek(kw::ignore) {
            let keyword = input.parse::<kw::ignore>()?;
            self.ignore = Some(keyword.span);
        } else {
            return Err(lookahead.error());
        }
        Ok(())
    }

    fn set_annotation(&mut self, span: Span, annotation: FieldAnnotation) -> syn::Result<()> {
        if self.annotation_span.is_some() {
            return Err(syn::Error::new(
                span,
                "a field takes at most one of `tag` and `transform`",
            ));
        }
        self.annotation_span = Some(span);
        self.annotation = annotation;
        Ok(())
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.ignore
            && (self.name.is_some() || self.bind.is_some() || self.annotation_span.is_some())
        {
            return Err(syn::Error::new(
                span,
                "an ignored field cannot have a name, a bind group or an annotation",
            ));
        }
        if let (Some(_), Some(group)) = (&self.name, &self.bind) {
            return Err(syn::Error::new(
                group.span(),
                "`bind` already names the field, remove `name`",
            ));
        }
        if let Some(name) = self.name.as_ref().or(self.bind.as_ref())
            && name.value().is_empty()
        {
            return Err(syn::Error::new(name.span(), "field name cannot be empty"));
        }
        Ok(())
    }
}
