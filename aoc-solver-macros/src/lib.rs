//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::{Attribute, DeriveInput, Lit, LitStr, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>`
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: Required. `N` in `1..=25`; every
///   `PartSolver<1>` through `PartSolver<N>` must be implemented.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, PartSolver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day17;
///
/// impl AocParser for Day17 { /* ... */ }
/// impl PartSolver<1> for Day17 { /* ... */ }
/// impl PartSolver<2> for Day17 { /* ... */ }
/// ```
///
/// Part numbers without an implementation return
/// `SolveError::PartNotImplemented`.
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc_solver")?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "max_parts must be in 1..=25"));
            }
            max_parts = Some(value);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;
    let max_parts =
        max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max_parts = N`"))?;

    let arms = (1..=max_parts).map(|part| {
        let n = Literal::u8_unsuffixed(part);
        quote! {
            #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
        }
    });
    let parts = Literal::u8_unsuffixed(max_parts);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::std::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro registering a solver with the plugin system
///
/// Submits an `aoc_solver::SolverPlugin` through `inventory`, so
/// `SolverRegistryBuilder::register_all_plugins` picks the solver up without
/// manual wiring.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering
///
/// The type must implement `Solver` and be a unit struct.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2023, day = 17, tags = ["grid", "dijkstra"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc")?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be in 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            let content;
            meta.value()?;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(tag) => tags.push(tag),
                    other => return Err(syn::Error::new(other.span(), "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    content.parse::<syn::Token![,]>()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year = ...`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day = ...`"))?;
    let year = Literal::u16_unsuffixed(year);
    let day = Literal::u8_unsuffixed(day);

    Ok(quote! {
        // Fails with "the trait bound `X: Solver` is not satisfied" pointing at the type
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                format!("expected a #[{ident}(...)] attribute"),
            )
        })
}
