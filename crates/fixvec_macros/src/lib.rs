use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derive the component-wise operator surface shared by the fixed-point vectors.
///
/// The struct must have named fields, all of type `FixedNum`, declared in
/// component order (`x`, `y`, then `z`). The generated code refers to
/// `crate::FixedNum`, `crate::VectorError` and `crate::error::fault`, so the
/// derive is only usable inside the `fixvec` crate itself.
///
/// Every generated operator saturates at the `FixedNum` limits instead of
/// following the build profile's overflow behavior.
///
/// # Generated
/// - `Add`, `Sub`, `Neg` and their assigning forms
/// - `Mul<FixedNum>` on both sides, `MulAssign<FixedNum>`
/// - `Div<FixedNum>` and `DivAssign<FixedNum>`, which panic on a zero divisor
/// - `Index<usize>`/`IndexMut<usize>`, which panic on an out-of-range index
/// - `Display` as `(x,y)` or `(x,y,z)`
/// - inherent `DIMENSIONS`, `checked_div`, `get`, `set`, `to_array`, `from_array`
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy, VectorOps)]
/// pub struct Vector2Fixed {
///     pub x: FixedNum,
///     pub y: FixedNum,
/// }
/// ```
#[proc_macro_derive(VectorOps)]
pub fn derive_vector_ops(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn component_fields(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VectorOps can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "VectorOps requires named component fields",
        ));
    };

    let idents: Vec<Ident> = fields.named.iter().filter_map(|f| f.ident.clone()).collect();
    if idents.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VectorOps requires at least one component",
        ));
    }
    Ok(idents)
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = component_fields(input)?;
    let dimensions = fields.len();
    let indices: Vec<Literal> = (0..dimensions).map(Literal::usize_unsuffixed).collect();
    let display_format = format!("({})", vec!["{}"; dimensions].join(","));

    let output = quote! {
        impl #impl_generics ::core::ops::Add for #name #ty_generics #where_clause {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { #( #fields: self.#fields.saturating_add(rhs.#fields) ),* }
            }
        }

        impl #impl_generics ::core::ops::AddAssign for #name #ty_generics #where_clause {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl #impl_generics ::core::ops::Sub for #name #ty_generics #where_clause {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { #( #fields: self.#fields.saturating_sub(rhs.#fields) ),* }
            }
        }

        impl #impl_generics ::core::ops::SubAssign for #name #ty_generics #where_clause {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl #impl_generics ::core::ops::Neg for #name #ty_generics #where_clause {
            type Output = Self;
            fn neg(self) -> Self {
                Self { #( #fields: self.#fields.saturating_neg() ),* }
            }
        }

        impl #impl_generics ::core::ops::Mul<crate::FixedNum> for #name #ty_generics #where_clause {
            type Output = Self;
            fn mul(self, rhs: crate::FixedNum) -> Self {
                Self { #( #fields: self.#fields.saturating_mul(rhs) ),* }
            }
        }

        // Same product order as `vector * scalar`, so both sides agree bit for bit.
        impl #impl_generics ::core::ops::Mul<#name #ty_generics> for crate::FixedNum #where_clause {
            type Output = #name #ty_generics;
            fn mul(self, rhs: #name #ty_generics) -> #name #ty_generics {
                rhs * self
            }
        }

        impl #impl_generics ::core::ops::MulAssign<crate::FixedNum> for #name #ty_generics #where_clause {
            fn mul_assign(&mut self, rhs: crate::FixedNum) {
                *self = *self * rhs;
            }
        }

        impl #impl_generics ::core::ops::Div<crate::FixedNum> for #name #ty_generics #where_clause {
            type Output = Self;
            fn div(self, rhs: crate::FixedNum) -> Self {
                self.checked_div(rhs).unwrap_or_else(|err| crate::error::fault(err))
            }
        }

        impl #impl_generics ::core::ops::DivAssign<crate::FixedNum> for #name #ty_generics #where_clause {
            fn div_assign(&mut self, rhs: crate::FixedNum) {
                *self = *self / rhs;
            }
        }

        impl #impl_generics ::core::ops::Index<usize> for #name #ty_generics #where_clause {
            type Output = crate::FixedNum;
            fn index(&self, index: usize) -> &crate::FixedNum {
                match index {
                    #( #indices => &self.#fields, )*
                    _ => crate::error::fault(crate::VectorError::IndexOutOfRange {
                        index,
                        len: #dimensions,
                    }),
                }
            }
        }

        impl #impl_generics ::core::ops::IndexMut<usize> for #name #ty_generics #where_clause {
            fn index_mut(&mut self, index: usize) -> &mut crate::FixedNum {
                match index {
                    #( #indices => &mut self.#fields, )*
                    _ => crate::error::fault(crate::VectorError::IndexOutOfRange {
                        index,
                        len: #dimensions,
                    }),
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, #display_format, #( self.#fields ),*)
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Number of components.
            pub const DIMENSIONS: usize = #dimensions;

            /// Divide every component by `divisor`.
            ///
            /// Returns [`VectorError::DivideByZero`](crate::VectorError::DivideByZero)
            /// when `divisor` is exactly zero. Quotients past the range saturate.
            pub fn checked_div(self, divisor: crate::FixedNum) -> crate::Result<Self> {
                if divisor == crate::FixedNum::ZERO {
                    return Err(crate::VectorError::DivideByZero);
                }
                Ok(Self { #( #fields: self.#fields.saturating_div(divisor) ),* })
            }

            /// Read a component by index, `None` when out of range.
            pub fn get(&self, index: usize) -> Option<crate::FixedNum> {
                match index {
                    #( #indices => Some(self.#fields), )*
                    _ => None,
                }
            }

            /// Write a component by index.
            pub fn set(&mut self, index: usize, value: crate::FixedNum) -> crate::Result<()> {
                match index {
                    #( #indices => self.#fields = value, )*
                    _ => {
                        return Err(crate::VectorError::IndexOutOfRange {
                            index,
                            len: Self::DIMENSIONS,
                        })
                    }
                }
                Ok(())
            }

            pub const fn to_array(self) -> [crate::FixedNum; #dimensions] {
                [ #( self.#fields ),* ]
            }

            pub const fn from_array(components: [crate::FixedNum; #dimensions]) -> Self {
                let [ #( #fields ),* ] = components;
                Self { #( #fields ),* }
            }
        }
    };

    Ok(output)
}
