//! Container-level attribute parsing for `#[derive(Mapped)]`.
//!
//! This module handles attributes on the struct itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[mapping(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Explicit type name; `None` means the Rust path of the type.
    pub(crate) name: Option<LitStr>,
}

/// Parses container-level `#[mapping(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("mapping") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[mapping] on container - currently no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        if options.name.is_some() {
                            return Err(meta.error("duplicate container option `name`"));
                        }
                        options.name = Some(meta.value()?.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `name`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[mapping]; \
use #[mapping(name = \"...\")]",
                ));
            }
        }
    }

    Ok(options)
}
