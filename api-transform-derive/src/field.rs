//! Parsing of `#[mapping(...)]` field attributes.
//!
//! This module maps attribute syntax to a field's role in the mapping and
//! produces structured errors for invalid forms.

use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// A field's role in the mapping, from its `#[mapping(...)]` attributes.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | None | Plain property |
/// | `#[mapping(hidden)]` | Listed in the hidden properties |
/// | `#[mapping(id)]` | Listed in the identifier properties |
/// | `#[mapping(rename = "x")]` | Listed under `x` instead of the field name |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) hidden: bool,
    pub(crate) id: bool,
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("mapping") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected field options (e.g., #[mapping(hidden)] or #[mapping(id)])",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("hidden") {
                        set_flag(&mut options.hidden, "hidden", &meta)
                    } else if meta.path.is_ident("id") {
                        set_flag(&mut options.id, "id", &meta)
                    } else if meta.path.is_ident("rename") {
                        if options.rename.is_some() {
                            return Err(meta.error("duplicate field option `rename`"));
                        }
                        options.rename = Some(meta.value()?.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `hidden`, `id` or `rename`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[mapping]",
                ));
            }
        }
    }

    Ok(options)
}

fn set_flag(flag: &mut bool, name: &str, meta: &syn::meta::ParseNestedMeta<'_>) -> Result<()> {
    if *flag {
        return Err(meta.error(format!("duplicate field option `{name}`")));
    }
    *flag = true;
    Ok(())
}
