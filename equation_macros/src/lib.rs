use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, ReturnType, Type};

fn is_f64(ty: &Type) -> bool {
    matches!(ty, Type::Path(type_path) if type_path.path.is_ident("f64"))
}

fn formatted_signature_error_msg(fn_name: &str) -> String {
    format!(
        "`{}` must have the signature `fn {}(x: f64) -> f64`",
        fn_name, fn_name
    )
}

/// Declares a single-argument numeric function for the function registry.
///
/// The annotated function must take exactly one `f64` and return `f64`. The
/// expansion keeps the signature and traces every application through `log`.
#[proc_macro_attribute]
pub fn unary_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_body = &input.block;
    let err_msg = formatted_signature_error_msg(&fn_name.to_string());

    let mut inputs = input.sig.inputs.iter();
    let (Some(arg), None) = (inputs.next(), inputs.next()) else {
        return Err(syn::Error::new_spanned(&input.sig, err_msg));
    };

    let arg_pat = match arg {
        FnArg::Typed(PatType { pat, ty, .. }) if is_f64(ty) => pat,
        _ => return Err(syn::Error::new_spanned(arg, err_msg)),
    };

    match &input.sig.output {
        ReturnType::Type(_, ty) if is_f64(ty) => {}
        output => return Err(syn::Error::new_spanned(output, err_msg)),
    }

    Ok(quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name(arg: f64) -> f64 {
            fn apply(#arg_pat: f64) -> f64 #fn_body

            let result = apply(arg);
            ::log::trace!("{}({}) = {}", stringify!(#fn_name), arg, result);
            result
        }
    })
}
