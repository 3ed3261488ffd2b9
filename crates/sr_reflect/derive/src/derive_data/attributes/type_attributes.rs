use proc_macro2::Span;
use syn::{Attribute, Ident, LitStr, Token, Type, parenthesized, parse::ParseStream};

use super::{kw, parse_reflect_attrs};

/// `method(ident: fn-type [, name = "..."])`
#[derive(Debug)]
pub(crate) struct MethodAttribute {
    pub ident: Ident,
    pub ty: Type,
    pub name: Option<LitStr>,
}

impl MethodAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);

        let ident: Ident = content.parse()?;
        content.parse::<Token![:]>()?;
        let ty: Type = content.parse()?;

        let mut name = None;
        if content.peek(Token![,]) {
            content.parse::<Token![,]>()?;
            content.parse::<kw::name>()?;
            content.parse::<Token![=]>()?;
            name = Some(content.parse()?);
        }
        if !content.is_empty() {
            return Err(content.error("unexpected tokens after method type"));
        }

        Ok(Self { ident, ty, name })
    }

    /// The registered name: the explicit one, or the identifier.
    pub fn name(&self) -> LitStr {
        match &self.name {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }
}

/// Attributes placed on the type itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(name = "...")]`
    pub name: Option<LitStr>,
    /// `#[reflect(auto_register)]`
    pub auto_register: Option<Span>,
    /// `#[reflect(method(...))]`, in declaration order.
    pub methods: Vec<MethodAttribute>,
}

impl TypeAttributes {
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
        } else if lookahead.peek(kw::auto_register) {
            let keyword = input.parse::<kw::auto_register>()?;
            self.auto_register = Some(keyword.span);
        } else if lookahead.peek(kw::method) {
            input.parse::<kw::method>()?;
            self.methods.push(MethodAttribute::parse(input)?);
        } else {
            return Err(lookahead.error());
        }
        Ok(())
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(name) = &self.name
            && name.value().is_empty()
        {
            return Err(syn::Error::new(name.span(), "type name cannot be empty"));
        }

        for (index, method) in self.methods.iter().enumerate() {
            let name = method.name().value();
            if self.methods[..index].iter().any(|m| m.name().value() == name) {
                return Err(syn::Error::new(
                    method.ident.span(),
                    format!("method `{name}` is registered twice"),
                ));
            }
        }
        Ok(())
    }
}
