//! Struct-specific `MappedType` derivation.
//!
//! Collects the property names of hidden and identifier fields, in field order.

use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result};

use crate::field::parse_field_options;

pub(crate) struct StructDeriveOutput {
    pub(crate) hidden_properties: Vec<String>,
    pub(crate) id_properties: Vec<String>,
}

pub(crate) fn derive_struct(data: DataStruct) -> Result<StructDeriveOutput> {
    let fields = match data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`Mapped` can only be derived for structs with named fields",
            ));
        }
        Fields::Unit => {
            return Ok(StructDeriveOutput {
                hidden_properties: Vec::new(),
                id_properties: Vec::new(),
            });
        }
    };

    let mut hidden_properties = Vec::new();
    let mut id_properties = Vec::new();

    for field in fields.named {
        let options = parse_field_options(&field.attrs)?;
        let Some(ident) = field.ident else {
            continue;
        };
        let property = options
            .rename
            .map_or_else(|| ident.unraw().to_string(), |rename| rename.value());

        if options.hidden {
            hidden_properties.push(property.clone());
        }
        if options.id {
            id_properties.push(property);
        }
    }

    Ok(StructDeriveOutput {
        hidden_properties,
        id_properties,
    })
}
