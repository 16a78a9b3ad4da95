//! Procedural macros for shikayat-router.
//!
//! - `route_table!` registers a list of routes and rejects, at compile time,
//!   patterns that are duplicated, that do not start with `/`, or that declare
//!   the same parameter twice.
//! - `#[page]` turns a struct into a static page with a fixed view.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, parenthesized, parse_macro_input, Expr, ItemStruct, LitStr, Token};

struct RouteEntry {
    pattern: LitStr,
    page: Expr,
}

impl Parse for RouteEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let pattern = input.parse()?;
        input.parse::<Token![=>]>()?;
        let page = input.parse()?;
        Ok(Self { pattern, page })
    }
}

struct RouteTable {
    router: Expr,
    entries: Punctuated<RouteEntry, Token![,]>,
}

impl Parse for RouteTable {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let router = input.parse()?;
        input.parse::<Token![=>]>()?;
        let content;
        braced!(content in input);
        let entries = content.parse_terminated(RouteEntry::parse, Token![,])?;
        Ok(Self { router, entries })
    }
}

/// Check a registration list the way the router cannot until start-up.
fn check_patterns<'a>(patterns: impl IntoIterator<Item = &'a LitStr>) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for lit in patterns {
        let pattern = lit.value();
        if !pattern.starts_with('/') {
            return Err(syn::Error::new(
                lit.span(),
                format!("route pattern {pattern:?} must start with '/'"),
            ));
        }
        let mut params = HashSet::new();
        for name in pattern.split('/').filter_map(|s| s.strip_prefix(':')) {
            if !params.insert(name) {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("parameter ':{name}' appears twice in {pattern:?}"),
                ));
            }
        }
        if !seen.insert(pattern.clone()) {
            return Err(syn::Error::new(
                lit.span(),
                format!("route pattern {pattern:?} is already registered; the second entry would never match"),
            ));
        }
    }
    Ok(())
}

/// Register routes on a router, in order.
///
/// # Usage
///
/// ```ignore
/// route_table!(router => {
///     "/" => HomePage::default(),
///     "/authorities/:id" => AuthorityDetailPage::new(directory.clone()),
/// })?;
/// ```
///
/// Expands to an expression of type `shikayat_router::Result<()>` that calls
/// `register` for every entry and stops at the first error.
#[proc_macro]
pub fn route_table(input: TokenStream) -> TokenStream {
    let table = parse_macro_input!(input as RouteTable);

    if let Err(err) = check_patterns(table.entries.iter().map(|e| &e.pattern)) {
        return err.to_compile_error().into();
    }

    let router = &table.router;
    let registrations = table.entries.iter().map(|entry| {
        let pattern = &entry.pattern;
        let page = &entry.page;
        quote! {
            (#router).register(#pattern, #page)?;
        }
    });

    let expanded = quote! {
        (|| -> ::shikayat_router::Result<()> {
            #(#registrations)*
            ::core::result::Result::Ok(())
        })()
    };

    TokenStream::from(expanded)
}

#[derive(Default)]
struct PageArgs {
    title: Option<LitStr>,
    lines: Vec<LitStr>,
    links: Vec<(LitStr, LitStr)>,
}

/// Implement `Page` for a struct that always shows the same view.
///
/// # Usage
///
/// ```ignore
/// #[page(
///     title = "About",
///     line = "Meri Shikayat connects citizens with the departments that can fix things.",
///     link("Home", "/"),
/// )]
/// pub struct AboutPage;
/// ```
#[proc_macro_attribute]
pub fn page(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = PageArgs::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("title") {
            args.title = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("line") {
            args.lines.push(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("link") {
            let content;
            parenthesized!(content in meta.input);
            let label: LitStr = content.parse()?;
            content.parse::<Token![,]>()?;
            let href: LitStr = content.parse()?;
            args.links.push((label, href));
            Ok(())
        } else {
            Err(meta.error("expected `title`, `line` or `link`"))
        }
    });
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemStruct);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let title = match &args.title {
        Some(title) => quote!(#title),
        None => {
            let name = struct_name.to_string();
            quote!(#name)
        }
    };
    let lines = &args.lines;
    let labels = args.links.iter().map(|(label, _)| label);
    let hrefs = args.links.iter().map(|(_, href)| href);

    let expanded = quote! {
        #input

        impl #impl_generics ::shikayat_router::Page for #struct_name #ty_generics #where_clause {
            fn render(&mut self, _params: &::shikayat_router::Params, cx: &mut ::shikayat_router::Context) {
                let view = ::shikayat_router::View::new(#title)
                    #(.line(#lines))*
                    #(.link(#labels, #hrefs))*;
                if let ::core::result::Result::Err(err) = cx.show(view) {
                    ::tracing::warn!(page = stringify!(#struct_name), %err, "failed to show page");
                }
            }
        }
    };

    TokenStream::from(expanded)
}
