use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input, parse_quote};

/// Derive macro for implementing the `Message` trait.
///
/// The type is registered under its identifier. Use
/// `#[message(name = "...")]` to choose a different name.
///
/// ```rust,ignore
/// #[derive(Debug, typeswitch::Message)]
/// #[message(name = "Special")]
/// struct SpecialInt(i32);
/// ```
#[proc_macro_derive(Message, attributes(message))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_message_impl(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_message_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    // `Message` requires `'static + Debug`; spell that out for generic types.
    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    if !type_params.is_empty() {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause.predicates.push(parse_quote!(#param: 'static));
        }
        where_clause
            .predicates
            .push(parse_quote!(#ident #ty_generics: ::core::fmt::Debug));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name = match message_name(input)? {
        Some(lit) => lit,
        None => LitStr::new(&ident.to_string(), ident.span()),
    };

    Ok(quote! {
        impl #impl_generics ::typeswitch::Message for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #name
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    })
}

/// Parses `#[message(name = "...")]`, rejecting unknown keys.
fn message_name(input: &DeriveInput) -> syn::Result<Option<LitStr>> {
    let mut name = None;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("message")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("message name must not be empty"));
                }
                name = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unknown attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name)
}
