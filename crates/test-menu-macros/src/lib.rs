extern crate proc_macro;
#[macro_use]
extern crate quote;
extern crate proc_macro2;
#[macro_use]
extern crate syn;

use darling::{ast::NestedMeta, FromMeta};
use proc_macro::TokenStream;
use syn::{parse, spanned::Spanned, ItemFn, ReturnType};

#[derive(Debug, Default, FromMeta)]
#[darling(default)]
struct CaseArgs {
    /// Free text shown in the menu, usually bracketed tags like `[net][slow]`.
    desc: Option<String>,
    /// Menu name, defaults to the function name.
    name: Option<String>,
}

/// Declare a test case for `test_menu`.
///
/// Keeps the function and adds a `const` `TestDescriptor` named after it in
/// upper case with a `_CASE` suffix, which is then handed to
/// `RegistryBuilder::register`.
///
/// The function takes no arguments and returns either `()` or
/// `test_menu::TestResult`.
///
/// # Example
///
/// ```ignore
/// #[test_case(desc = "[net]")]
/// fn dhcp_lease() -> TestResult {
///     test_assert!(lease().is_some());
///     Ok(())
/// }
///
/// builder.register(DHCP_LEASE_CASE);
/// ```
#[proc_macro_attribute]
pub fn test_case(args: TokenStream, input: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(darling::Error::from(e).write_errors()),
    };
    let args = match CaseArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let f = parse_macro_input!(input as ItemFn);

    let valid_signature = f.sig.inputs.is_empty()
        && f.sig.asyncness.is_none()
        && f.sig.constness.is_none()
        && f.sig.unsafety.is_none()
        && f.sig.generics.params.is_empty()
        && f.sig.variadic.is_none();

    if !valid_signature {
        return parse::Error::new(
            f.sig.span(),
            "`#[test_case]` function must have signature `fn() [-> TestResult]`",
        )
        .to_compile_error()
        .into();
    }

    let ident = &f.sig.ident;
    let vis = &f.vis;
    let case_ident = format_ident!("{}_CASE", ident.to_string().to_uppercase());
    let name = args.name.unwrap_or_else(|| ident.to_string());
    let desc = args.desc.unwrap_or_default();

    let entry = match f.sig.output {
        ReturnType::Default => quote! {
            {
                fn __test_menu_entry() -> ::test_menu::TestResult {
                    #ident();
                    ::core::result::Result::Ok(())
                }
                __test_menu_entry
            }
        },
        ReturnType::Type(..) => quote!(#ident),
    };

    quote!(
        #f

        #vis const #case_ident: ::test_menu::TestDescriptor = ::test_menu::TestDescriptor::new(
            #name,
            #desc,
            file!(),
            line!(),
            #entry,
        );
    )
    .into()
}
