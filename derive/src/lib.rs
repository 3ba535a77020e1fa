//! `#[derive(Formattable)]`: generates the object/enum `Formatter` impl
//! spec §6 describes for user-defined aggregates, so callers don't hand
//! write the begin/end-object or name-table boilerplate `array.rs` and
//! `enums.rs` show for the built-in composites.
//!
//! Structs with named fields get an object formatter: each field is
//! written under its Rust name (the derive doesn't yet expose a way to
//! pick a non-default `FieldPolicy`; see `DESIGN.md`), `Option<T>`
//! fields are omitted entirely on `None` rather than written as
//! `"field": null`, and an unrecognized key during deserialization is
//! discarded with `skip_value` instead of erroring. Fieldless enums get
//! a `JsonEnum` impl plus the matching `Formattable` impl via
//! `symbolic_json::impl_json_enum_formattable!`.

#[macro_use]
extern crate proc_macro_error;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::abort;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

#[proc_macro_error]
#[proc_macro_derive(Formattable)]
pub fn derive_formattable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match &input.data {
        Data::Struct(data) => derive_struct(&input, data),
        Data::Enum(data) => derive_enum(&input, data),
        Data::Union(_) => abort!(input.ident, "Formattable cannot be derived for unions"),
    };
    TokenStream::from(expanded)
}

fn is_option(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn derive_struct(input: &DeriveInput, data: &syn::DataStruct) -> TokenStream2 {
    let ident = &input.ident;
    let fmt_ident = format_ident!("__{}Formattable", ident);

    let fields = match &data.fields {
        Fields::Named(named) => &named.named,
        Fields::Unit => abort!(ident, "Formattable cannot be derived for unit structs; give it at least one field or derive it on an enum instead"),
        Fields::Unnamed(_) => abort!(ident, "Formattable can only be derived for structs with named fields"),
    };

    let field_idents: Vec<_> = fields.iter().map(|f| f.ident.clone().unwrap()).collect();
    let field_types: Vec<_> = fields.iter().map(|f| f.ty.clone()).collect();
    let field_names: Vec<_> = field_idents.iter().map(|i| i.to_string()).collect();
    let field_is_optional: Vec<_> = field_types.iter().map(|ty| is_option(ty).is_some()).collect();

    let serialize_fields = field_idents.iter().zip(field_types.iter()).zip(field_names.iter()).zip(field_is_optional.iter()).map(
        |(((field, ty), name), optional)| {
            if *optional {
                quote! {
                    if value.#field.is_some() {
                        if !first { w.write_value_separator(); }
                        first = false;
                        w.write_key(#name);
                        let child_guard = guard.enter::<#ty>(w.len())?;
                        <#ty as symbolic_json::Formattable<S>>::F::serialize(w, &value.#field, child_guard)?;
                    }
                }
            } else {
                quote! {
                    if !first { w.write_value_separator(); }
                    first = false;
                    w.write_key(#name);
                    let child_guard = guard.enter::<#ty>(w.len())?;
                    <#ty as symbolic_json::Formattable<S>>::F::serialize(w, &value.#field, child_guard)?;
                }
            }
        },
    );

    let slot_idents: Vec<_> = field_idents.iter().map(|i| format_ident!("__slot_{}", i)).collect();
    let slot_decls = slot_idents.iter().map(|slot| quote! { let mut #slot = None; });
    let match_arms = field_names.iter().zip(field_types.iter()).zip(slot_idents.iter()).map(|((name, ty), slot)| {
        quote! {
            #name => {
                #slot = Some(<#ty as symbolic_json::Formattable<S>>::F::deserialize(r)?);
            }
        }
    });

    let field_builders = field_idents.iter().zip(field_names.iter()).zip(slot_idents.iter()).zip(field_is_optional.iter()).map(
        |(((field, name), slot), optional)| {
            if *optional {
                quote! { #field: #slot.unwrap_or(None), }
            } else {
                quote! {
                    #field: #slot.ok_or_else(|| symbolic_json::JsonError::new(
                        symbolic_json::JsonErrorKind::UnexpectedEnd,
                        object_start,
                        concat!("missing required field `", #name, "`"),
                    ))?,
                }
            }
        },
    );

    quote! {
        #[doc(hidden)]
        pub struct #fmt_ident;

        impl<S: symbolic_json::Symbol> symbolic_json::Formatter<S> for #fmt_ident {
            type Value = #ident;

            fn serialize(
                w: &mut symbolic_json::buffer::Writer<S>,
                value: &#ident,
                guard: symbolic_json::recursion::NestingGuard,
            ) -> symbolic_json::Result<()> {
                w.write_begin_object();
                let mut first = true;
                #( #serialize_fields )*
                w.write_end_object();
                Ok(())
            }

            fn deserialize(r: &mut symbolic_json::buffer::Reader<S>) -> symbolic_json::Result<#ident> {
                let object_start = r.pos();
                r.read_begin_object()?;
                #( #slot_decls )*
                let mut count = 0usize;
                loop {
                    if !r.read_end_object_or_value_separator(&mut count)? {
                        break;
                    }
                    let key = r.read_string()?;
                    r.read_key_separator()?;
                    match key.as_str() {
                        #( #match_arms )*
                        _ => { r.skip_value()?; }
                    }
                }
                Ok(#ident {
                    #( #field_builders )*
                })
            }
        }

        impl<S: symbolic_json::Symbol> symbolic_json::Formattable<S> for #ident {
            type F = #fmt_ident;
        }

        // The derive can't prove a field graph is acyclic, so every
        // derived aggregate is conservatively treated as a recursion
        // candidate; see DESIGN.md.
        impl symbolic_json::recursion::RecursionCandidate for #ident {
            const IS_RECURSION_CANDIDATE: bool = true;
        }
    }
}

fn derive_enum(input: &DeriveInput, data: &syn::DataEnum) -> TokenStream2 {
    let ident = &input.ident;

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            abort!(variant.ident, "Formattable can only be derived for fieldless enums; `{}` carries data", variant.ident);
        }
    }

    let variant_idents: Vec<_> = data.variants.iter().map(|v| v.ident.clone()).collect();
    let variant_names: Vec<_> = variant_idents.iter().map(|i| i.to_string()).collect();

    quote! {
        impl symbolic_json::enums::JsonEnum for #ident {
            const MEMBERS: &'static [(#ident, &'static str)] = &[
                #( (#ident::#variant_idents, #variant_names), )*
            ];

            // Overrides the trait's default linear scan with a `match`,
            // which rustc compiles to a dense jump on the discriminant.
            fn to_name(&self) -> Option<&'static str> {
                match self {
                    #( #ident::#variant_idents => Some(#variant_names), )*
                }
            }
        }

        symbolic_json::impl_json_enum_formattable!(#ident);
    }
}
