//! `#[operation]` attribute for ikanban commands
//!
//! Implements `ikanban_operations::Operation` and `OperationMeta` for a
//! struct from its definition: verb, noun and description come from the attribute arguments,
//! parameter metadata from the named fields (doc comment, type, optionality
//! and `#[param(alias = "...")]` markers).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Field, Fields, GenericArgument,
    Ident, Lit, LitStr, Meta, PathArguments, Token, Type,
};

/// Derive `Operation` metadata for a command struct
///
/// ```ignore
/// #[operation(verb = "move", noun = "card", description = "Move a card to a column")]
/// #[derive(Debug, Deserialize, Serialize)]
/// pub struct MoveCard {
///     /// The card to move
///     #[param(alias = "id")]
///     pub card_id: String,
///     /// Destination column
///     pub to_column_id: String,
///     /// Insert position; appends when omitted
///     pub target_index: Option<usize>,
/// }
/// ```
///
/// `#[param]` markers are consumed here and removed from the emitted struct.
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as OperationArgs);
    let input = parse_macro_input!(item as DeriveInput);

    expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct OperationArgs {
    verb: LitStr,
    noun: LitStr,
    description: LitStr,
}

impl Parse for OperationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut verb = None;
        let mut noun = None;
        let mut description = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            let slot = match key.to_string().as_str() {
                "verb" => &mut verb,
                "noun" => &mut noun,
                "description" => &mut description,
                other => {
                    return Err(syn::Error::new_spanned(
                        &key,
                        format!("unknown operation argument `{other}`"),
                    ))
                }
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(key, "duplicate operation argument"));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        let missing = |what: &str| input.error(format!("missing `{what}` argument"));
        Ok(Self {
            verb: verb.ok_or_else(|| missing("verb"))?,
            noun: noun.ok_or_else(|| missing("noun"))?,
            description: description.ok_or_else(|| missing("description"))?,
        })
    }
}

fn expand(args: OperationArgs, mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let params = match &mut input.data {
        Data::Struct(data) => match &mut data.fields {
            Fields::Named(fields) => fields
                .named
                .iter_mut()
                .map(param_meta)
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "operations need named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[operation] applies to structs only",
            ))
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let OperationArgs {
        verb,
        noun,
        description,
    } = args;
    let count = params.len();

    Ok(quote! {
        #input

        impl #impl_generics ::ikanban_operations::OperationMeta for #name #ty_generics #where_clause {
            const VERB: &'static str = #verb;
            const NOUN: &'static str = #noun;

            fn params() -> &'static [::ikanban_operations::ParamMeta] {
                static PARAMS: [::ikanban_operations::ParamMeta; #count] = [#(#params),*];
                &PARAMS
            }
        }

        impl #impl_generics ::ikanban_operations::Operation for #name #ty_generics #where_clause {
            fn verb(&self) -> &'static str {
                #verb
            }

            fn noun(&self) -> &'static str {
                #noun
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn parameters(&self) -> &'static [::ikanban_operations::ParamMeta] {
                <Self as ::ikanban_operations::OperationMeta>::params()
            }
        }
    })
}

/// Build the `ParamMeta` expression for one field and strip its `#[param]` markers
fn param_meta(field: &mut Field) -> syn::Result<TokenStream2> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(&*field, "field has no name"));
    };
    let name = ident.to_string();
    let description = doc_text(&field.attrs);
    let aliases = param_aliases(&field.attrs)?;
    let required = !is_option(&field.ty) && !has_serde_default(&field.attrs);
    let param_type = param_type(&field.ty);

    field.attrs.retain(|attr| !attr.path().is_ident("param"));

    let required = required.then(|| quote! { .required() });
    Ok(quote! {
        ::ikanban_operations::ParamMeta::new(#name)
            .description(#description)
            .param_type(#param_type)
            .aliases(&[#(#aliases),*])
            #required
    })
}

fn doc_text(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn param_aliases(attrs: &[Attribute]) -> syn::Result<Vec<String>> {
    let mut aliases = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("param")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("alias") {
                let value: LitStr = meta.value()?.parse()?;
                aliases.push(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `alias = \"...\"`"))
            }
        })?;
    }
    Ok(aliases)
}

fn has_serde_default(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .any(|attr| {
            let mut found = false;
            // Other serde keys may carry values we don't care about.
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    found = true;
                }
                if meta.input.peek(Token![=]) {
                    let _: Expr = meta.value()?.parse()?;
                }
                Ok(())
            });
            found
        })
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn is_option(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|seg| seg.ident == "Option")
}

fn option_inner(seg: &syn::PathSegment) -> Option<&Type> {
    match &seg.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    }
}

fn param_type(ty: &Type) -> TokenStream2 {
    let variant = match last_segment(ty) {
        Some(seg) if seg.ident == "Option" => {
            return option_inner(seg).map_or_else(|| quote! { ::ikanban_operations::ParamType::String }, param_type);
        }
        Some(seg) => match seg.ident.to_string().as_str() {
            "Vec" => quote! { Array },
            "bool" => quote! { Boolean },
            "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
                quote! { Integer }
            }
            "f32" | "f64" => quote! { Number },
            "Value" | "Map" | "Background" | "CardFields" => quote! { Object },
            _ => quote! { String },
        },
        None => quote! { String },
    };
    quote! { ::ikanban_operations::ParamType::#variant }
}
