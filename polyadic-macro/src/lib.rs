//! Procedural macros used by the `polyadic` crate to generate its closed set of fixed-arity
//! implementations.
//!
//! These are not meant to be invoked outside of `polyadic` itself: the generated code refers to
//! the traits `Tuple`, `List`, `ToUnary` and `ToConstant`, and to the types `Number`, `S` and `Z`,
//! by their bare names, so they must be in scope at the invocation site.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{parse_macro_input, LitInt},
};

/// Implement `Tuple` and `List` for every flat tuple of arity `0 ..= N` and its corresponding
/// inductive list.
///
/// For arity 3, this generates:
///
/// ```ignore
/// impl<T0, T1, T2> Tuple for (T0, T1, T2) {
///     type AsList = (T0, (T1, (T2, ())));
///     fn into_list(self) -> Self::AsList { /* ... */ }
/// }
///
/// impl<T0, T1, T2> List for (T0, (T1, (T2, ()))) {
///     type AsTuple = (T0, T1, T2);
///     fn into_tuple(self) -> Self::AsTuple { /* ... */ }
/// }
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    (0..=max).map(tuple_impls).collect::<TokenStream2>().into()
}

fn tuple_impls(arity: usize) -> TokenStream2 {
    let types = (0..arity)
        .map(|i| format_ident!("T{}", i))
        .collect::<Vec<_>>();
    let values = (0..arity)
        .map(|i| format_ident!("t{}", i))
        .collect::<Vec<_>>();

    // Build the nested list shapes from the innermost `()` outward
    let mut list_type = quote!(());
    let mut list_value = quote!(());
    for (ty, value) in types.iter().zip(values.iter()).rev() {
        list_type = quote!((#ty, #list_type));
        list_value = quote!((#value, #list_value));
    }

    quote! {
        impl<#(#types),*> Tuple for (#(#types,)*) {
            type AsList = #list_type;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #list_value
            }
        }

        impl<#(#types),*> List for #list_type {
            type AsTuple = (#(#types,)*);

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let #list_value = self;
                (#(#values,)*)
            }
        }
    }
}

/// Generate the conversions between `Number<N>` and the unary number `S<S<...Z>>` for every
/// `N` in `0 ..= MAX`.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut unary = quote!(Z);
    let mut impls = TokenStream2::new();
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }

    impls.into()
}
